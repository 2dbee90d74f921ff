use std::collections::HashMap;

use crate::JigError;
use crate::JigResult;

/// Directive key redirecting compilation to the real root template.
pub const MAIN: &str = "main";
/// Directive key naming the output path, relative to the source file.
pub const OUT: &str = "out";
/// Directive key enabling pretty-printed output when set to `"true"`.
pub const PRETTY: &str = "pretty";
/// Legacy directive key: `compress: false` also selects pretty output.
pub const COMPRESS: &str = "compress";

/// Options parsed from the first line of a template file.
///
/// The line is a template comment carrying comma-separated `key: value`
/// pairs, e.g. `{# out: build/index.html, pretty: true #}`. Keys the
/// orchestrator does not recognize are kept in the set and ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirectiveSet {
	entries: HashMap<String, String>,
}

impl DirectiveSet {
	/// Parse the first line of a template file into a directive set.
	///
	/// The surrounding `{# ... #}` markers are optional. A segment without a
	/// `:` is skipped rather than rejected, which tolerates stray text next
	/// to real directives. A repeated key keeps its last value. A line
	/// yielding no pairs at all is an error, not an empty set.
	pub fn parse(line: &str) -> JigResult<Self> {
		let mut entries = HashMap::new();

		for segment in strip_comment_markers(line).split(',') {
			let Some((key, value)) = segment.split_once(':') else {
				continue;
			};
			entries.insert(key.trim().to_string(), value.trim().to_string());
		}

		if entries.is_empty() {
			return Err(JigError::Parse);
		}

		Ok(Self { entries })
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(String::as_str)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Number of parsed pairs, recognized or not.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// True when the directives ask for pretty-printed output, either via
	/// `pretty: true` or the legacy `compress: false` form.
	pub fn pretty_requested(&self) -> bool {
		self.get(PRETTY) == Some("true") || self.get(COMPRESS) == Some("false")
	}
}

/// Strip the optional `{# ... #}` comment markers around a directive line.
fn strip_comment_markers(line: &str) -> &str {
	let line = line.trim();
	let line = line
		.strip_prefix("{#-")
		.or_else(|| line.strip_prefix("{#"))
		.unwrap_or(line);
	line
		.strip_suffix("-#}")
		.or_else(|| line.strip_suffix("#}"))
		.unwrap_or(line)
}
