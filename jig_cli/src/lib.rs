use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

pub mod session;
pub mod status;

#[cfg(test)]
mod __tests;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Compile MiniJinja templates to HTML on save, driven by first-line directives.",
	long_about = "jig watches template files and turns them into rendered HTML whenever they \
	              are saved, honoring per-file directives embedded in a comment on the first \
	              line:\n\n  {# out: build/index.html, pretty: true #}\n\nA `main` directive \
	              redirects compilation to the real root template, so partials recompile the \
	              page that includes them.\n\nQuick start:\n  jig compile page.j2   Compile one \
	              file\n  jig direct < body.j2  Render stdin to stdout\n  jig watch src         \
	              Recompile on every save"
)]
pub struct JigCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory (where `jig.toml` lives).
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Compile a template file according to its directive line.
	///
	/// Reads the first line of the file for `key: value` directives. A
	/// `main` directive redirects compilation to the named root template;
	/// an `out` directive renders the file and writes the markup relative
	/// to it. A directive line with neither key compiles nothing and is
	/// not an error.
	Compile {
		/// The template file to compile.
		file: PathBuf,
	},
	/// Render template text from stdin and print the markup to stdout.
	///
	/// No directive parsing and no file writes: the rendered markup
	/// replaces the input, always pretty-printed. Status output goes to
	/// stderr so stdout stays clean markup.
	Direct {
		/// Source file used to resolve relative `include`/`extends`.
		#[arg(long)]
		source: Option<PathBuf>,
	},
	/// Watch a directory and compile template files as they are saved.
	///
	/// Template saves compile per their directive lines; `jig.toml` saves
	/// swap in a fresh configuration snapshot. Saving a file whose first
	/// line redirects via `main` recompiles the root it points at.
	/// Compilation on save can be paused with `compile_on_save = false`.
	Watch {
		/// Directory to watch. Defaults to the project root.
		dir: Option<PathBuf>,
	},
}
