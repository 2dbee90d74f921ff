use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use jig_core::AnyEmptyResult;
use jig_core::Config;
use jig_core::ConfigHandle;
use similar_asserts::assert_eq;

use crate::session::Session;
use crate::status::ConsoleSink;
use crate::status::Status;
use crate::status::StatusView;

#[test]
fn status_view_starts_hidden() {
	let view = StatusView::new();
	assert_eq!(view.current(), None);
}

#[test]
fn status_view_shows_until_timeout() {
	let mut view = StatusView::new();

	view.show_success(Duration::from_secs(60));
	assert_eq!(view.current(), Some(Status::Success));

	// A zero timeout has already expired by the time it is read.
	view.show_error(Duration::ZERO);
	assert_eq!(view.current(), None);
}

#[test]
fn status_view_hide_clears_state() {
	let mut view = StatusView::new();

	view.show_error(Duration::from_secs(60));
	assert_eq!(view.current(), Some(Status::Error));

	view.hide();
	assert_eq!(view.current(), None);
}

#[test]
fn session_compiles_saved_template_and_fires_event() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let source = tmp.path().join("index.j2");
	std::fs::write(&source, "{# out: build/index.html #}\n<h1>Hi</h1>\n")?;

	let config = ConfigHandle::new(Config::default());
	let sink = ConsoleSink::new(config.clone(), false);
	let mut session = Session::start(
		tmp.path().to_path_buf(),
		tmp.path().to_path_buf(),
		config,
		sink,
		false,
	)?;

	let events = Rc::new(Cell::new(0));
	{
		let events = Rc::clone(&events);
		session
			.emitter_mut()
			.on_did_compile_file(move |_| events.set(events.get() + 1));
	}

	session.handle_save(&source);

	assert!(tmp.path().join("build/index.html").exists());
	assert_eq!(events.get(), 1);

	session.stop();
	// Stopping twice must be a no-op.
	session.stop();

	Ok(())
}

#[test]
fn session_skips_compilation_when_disabled() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let source = tmp.path().join("index.j2");
	std::fs::write(&source, "{# out: build/index.html #}\n<h1>Hi</h1>\n")?;

	let config = ConfigHandle::new(Config {
		compile_on_save: false,
		..Config::default()
	});
	let sink = ConsoleSink::new(config.clone(), false);
	let mut session = Session::start(
		tmp.path().to_path_buf(),
		tmp.path().to_path_buf(),
		config,
		sink,
		false,
	)?;

	session.handle_save(&source);

	assert!(!tmp.path().join("build/index.html").exists());

	Ok(())
}

#[test]
fn session_swaps_config_snapshot_on_config_save() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("jig.toml"), "indent_size = 2\n")?;

	let config = ConfigHandle::new(Config::default());
	let sink = ConsoleSink::new(config.clone(), false);
	let mut session = Session::start(
		tmp.path().to_path_buf(),
		tmp.path().to_path_buf(),
		config.clone(),
		sink,
		false,
	)?;

	assert_eq!(config.snapshot().indent_size, 4);
	session.handle_save(&tmp.path().join("jig.toml"));
	assert_eq!(config.snapshot().indent_size, 2);

	Ok(())
}
