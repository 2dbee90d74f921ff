use std::io::Read;
use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use jig_cli::Commands;
use jig_cli::JigCli;
use jig_cli::session::Session;
use jig_cli::status::ConsoleSink;
use jig_core::AnyEmptyResult;
use jig_core::Compiled;
use jig_core::ConfigHandle;
use jig_core::NotificationSink;
use jig_core::compile_direct;
use jig_core::compile_file;
use jig_core::report_outcome;
use owo_colors::OwoColorize;

fn main() {
	let args = JigCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();

	let result = match &args.command {
		Some(Commands::Compile { file }) => run_compile(&args, file, use_color),
		Some(Commands::Direct { source }) => run_direct(&args, source.as_deref(), use_color),
		Some(Commands::Watch { dir }) => run_watch(&args, dir.clone(), use_color),
		None => {
			eprintln!("No subcommand specified. Run `jig --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		if use_color {
			eprintln!("{} {e}", "error:".red());
		} else {
			eprintln!("error: {e}");
		}
		process::exit(1);
	}
}

fn resolve_root(args: &JigCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn load_config(args: &JigCli) -> Result<ConfigHandle, jig_core::JigError> {
	ConfigHandle::load_or_default(&resolve_root(args))
}

fn run_compile(args: &JigCli, file: &Path, use_color: bool) -> AnyEmptyResult {
	let config = load_config(args)?;
	let mut sink = ConsoleSink::new(config.clone(), use_color);

	let outcome = compile_file(file, &config.snapshot());
	let failed = outcome.is_err();
	report_outcome(&outcome, &mut sink);

	if args.verbose {
		if let Ok(Compiled::Inert) = &outcome {
			eprintln!("no actionable directives in {}", file.display());
		}
	}

	if failed {
		process::exit(1);
	}

	Ok(())
}

fn run_direct(args: &JigCli, source: Option<&Path>, use_color: bool) -> AnyEmptyResult {
	let config = load_config(args)?;
	let mut sink = ConsoleSink::new(config.clone(), use_color);

	let mut text = String::new();
	std::io::stdin().read_to_string(&mut text)?;

	// Anchor relative includes at the named source file, or at the project
	// root when rendering loose text.
	let source_path = source.map_or_else(
		|| resolve_root(args).join("stdin.j2"),
		Path::to_path_buf,
	);

	match compile_direct(&text, &source_path, &config.snapshot()) {
		Ok(markup) => {
			print!("{markup}");
			sink.report_success("Created HTML from template");
			Ok(())
		}
		Err(error) => {
			sink.report_error(&error.to_string());
			process::exit(1);
		}
	}
}

fn run_watch(args: &JigCli, dir: Option<PathBuf>, use_color: bool) -> AnyEmptyResult {
	let root = resolve_root(args);
	let config = ConfigHandle::load_or_default(&root)?;
	let sink = ConsoleSink::new(config.clone(), use_color);
	let watch_dir = dir.unwrap_or_else(|| root.clone());

	let mut session = Session::start(watch_dir, root, config, sink, args.verbose)?;

	if args.verbose {
		session.emitter_mut().on_did_compile_file(|path| {
			eprintln!("event: did-compile-file {}", path.display());
		});
	}

	session.run();
	session.stop();

	Ok(())
}
