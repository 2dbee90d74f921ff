use std::collections::HashSet;
use std::fs;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use crate::Config;
use crate::DirectiveSet;
use crate::JigError;
use crate::JigResult;
use crate::directive;
use crate::paths;
use crate::render_pretty;
use crate::render_raw;
use crate::write_output;

/// File extensions recognized as template sources.
pub const TEMPLATE_EXTENSIONS: &[&str] = &["j2", "jinja"];

/// Outcome of a file compilation that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compiled {
	/// Markup was rendered and written to the destination.
	Written { source: PathBuf, dest: PathBuf },
	/// The directive line carried neither `main` nor `out`; nothing to do.
	Inert,
}

/// Check whether a path carries a recognized template extension.
pub fn is_template_file(path: &Path) -> bool {
	path.extension()
		.and_then(|ext| ext.to_str())
		.is_some_and(|ext| TEMPLATE_EXTENSIONS.contains(&ext))
}

/// Compile a template file according to its directive line.
///
/// A `main` directive redirects compilation to the named root template and
/// starts over from there, so every path in the redirect chain is
/// validated the same way the original was. An `out` directive renders the
/// file (minus the directive line) and writes the markup relative to the
/// file that carried it. A directive line with neither key is inert.
///
/// Validation failures are hard stops: nothing is read or written past the
/// first failing step.
pub fn compile_file(path: &Path, config: &Config) -> JigResult<Compiled> {
	let mut visited = HashSet::new();
	compile_visited(&paths::normalize(path), config, &mut visited)
}

fn compile_visited(
	path: &Path,
	config: &Config,
	visited: &mut HashSet<PathBuf>,
) -> JigResult<Compiled> {
	if !visited.insert(path.to_path_buf()) {
		return Err(JigError::RedirectCycle(path.to_path_buf()));
	}
	if !path.exists() {
		return Err(JigError::NotFound(path.to_path_buf()));
	}
	if !is_template_file(path) {
		return Err(JigError::NotATemplate(path.to_path_buf()));
	}

	let first_line = read_first_line(path)?;
	let directives = DirectiveSet::parse(&first_line)?;

	if let Some(main) = directives.get(directive::MAIN) {
		// Another file is the real compilation root; start over from there.
		let target = paths::resolve(path, main);
		return compile_visited(&target, config, visited);
	}

	let Some(out) = directives.get(directive::OUT) else {
		return Ok(Compiled::Inert);
	};

	let content = fs::read_to_string(path)?;
	let body = strip_first_line(&content);
	let rendered = if directives.pretty_requested() {
		render_pretty(body, path, config.indent_size)?
	} else {
		render_raw(body, path)?
	};

	let dest = paths::resolve(path, out);
	write_output(&dest, &rendered)?;

	Ok(Compiled::Written {
		source: path.to_path_buf(),
		dest,
	})
}

/// Render template text directly, bypassing directive parsing and file
/// I/O. Output is always pretty-printed; `source_path` only anchors
/// relative `include`/`extends`.
pub fn compile_direct(text: &str, source_path: &Path, config: &Config) -> JigResult<String> {
	render_pretty(text, source_path, config.indent_size)
}

/// Read only the first line of a file. Fetching the directive line never
/// pulls the whole template into memory.
fn read_first_line(path: &Path) -> JigResult<String> {
	let file = fs::File::open(path)?;
	let mut reader = BufReader::new(file);
	let mut line = String::new();
	reader.read_line(&mut line)?;

	let line = line.trim_end_matches(['\n', '\r']);
	if line.is_empty() {
		return Err(JigError::Io(std::io::Error::new(
			std::io::ErrorKind::UnexpectedEof,
			format!("no first line in {}", path.display()),
		)));
	}

	Ok(line.to_string())
}

/// Drop exactly the first line (the directive line) from the content.
fn strip_first_line(content: &str) -> &str {
	content.split_once('\n').map_or("", |(_, rest)| rest)
}
