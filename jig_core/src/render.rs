use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::JigError;
use crate::JigResult;
use crate::html::format_html;

static HTML_COMMENT_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

/// Render template source to markup.
///
/// The source file's directory backs a path loader so `include` and
/// `extends` inside the template resolve relative to the file, the same way
/// the files lay on disk. The compiler's own diagnostic is preserved in the
/// error message.
pub fn render_raw(source: &str, source_path: &Path) -> JigResult<String> {
	let name = source_path
		.file_name()
		.and_then(|name| name.to_str())
		.unwrap_or("template");

	let mut env = minijinja::Environment::new();
	env.set_undefined_behavior(minijinja::UndefinedBehavior::Chainable);
	if let Some(dir) = source_path.parent() {
		env.set_loader(minijinja::path_loader(dir));
	}

	env.add_template(name, source)
		.map_err(|e| JigError::Template(format!("{e:#}")))?;

	let template = env
		.get_template(name)
		.map_err(|e| JigError::Template(format!("{e:#}")))?;

	template
		.render(minijinja::context! {})
		.map_err(|e| JigError::Template(format!("{e:#}")))
}

/// Render template source to markup and reformat it.
///
/// HTML comments are always stripped from the rendered output before
/// formatting; the indent width comes from user configuration. The result
/// ends with a trailing newline.
pub fn render_pretty(source: &str, source_path: &Path, indent_size: usize) -> JigResult<String> {
	let rendered = render_raw(source, source_path)?;
	let stripped = strip_html_comments(&rendered);
	Ok(format_html(&stripped, indent_size))
}

/// Remove every `<!-- ... -->` comment, non-greedy, across lines.
pub fn strip_html_comments(html: &str) -> String {
	HTML_COMMENT_RE.replace_all(html, "").into_owned()
}
