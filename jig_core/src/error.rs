use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
pub enum JigError {
	#[error(transparent)]
	#[diagnostic(code(jig::io_error))]
	Io(#[from] std::io::Error),

	#[error("file not found: {}", .0.display())]
	#[diagnostic(code(jig::not_found))]
	NotFound(PathBuf),
	#[error("not a template file: {}", .0.display())]
	#[diagnostic(code(jig::not_a_template))]
	NotATemplate(PathBuf),
	#[error("first line has no directives")]
	#[diagnostic(
		code(jig::parse_error),
		help("expected `{{# key: value, ... #}}` on the first line")
	)]
	Parse,
	#[error("main redirection cycle at {}", .0.display())]
	#[diagnostic(code(jig::redirect_cycle))]
	RedirectCycle(PathBuf),
	#[error("failure to render template: {0}")]
	#[diagnostic(code(jig::template_error))]
	Template(String),
	#[error("failure to parse config: {0}")]
	#[diagnostic(code(jig::config_parse))]
	ConfigParse(String),
	#[error("invalid value for `{key}`: {value} (allowed: {allowed})")]
	#[diagnostic(code(jig::config_value))]
	ConfigValue {
		key: String,
		value: String,
		allowed: String,
	},
}

pub type JigResult<T> = Result<T, JigError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
