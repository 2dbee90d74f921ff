use assert_cmd::Command;
use jig_core::AnyEmptyResult;
use predicates::prelude::*;

#[test]
fn compile_writes_output_from_out_directive() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let source = tmp.path().join("index.j2");
	std::fs::write(&source, "{# out: build/index.html #}\n<h1>Hello</h1>\n")?;

	let mut cmd = Command::cargo_bin("jig")?;
	cmd.arg("compile")
		.arg(&source)
		.arg("--path")
		.arg(tmp.path())
		.arg("--no-color")
		.assert()
		.success()
		.stderr(predicates::str::contains("Created!"))
		.stderr(predicates::str::contains("File created:"));

	let content = std::fs::read_to_string(tmp.path().join("build/index.html"))?;
	assert_eq!(content, "<h1>Hello</h1>");

	Ok(())
}

#[test]
fn compile_follows_main_redirection() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir(tmp.path().join("sub"))?;
	std::fs::write(
		tmp.path().join("sub/base.j2"),
		"{# out: out.html #}\n<p>base</p>\n",
	)?;
	std::fs::write(
		tmp.path().join("page.j2"),
		"{# main: sub/base.j2 #}\nignored\n",
	)?;

	let mut cmd = Command::cargo_bin("jig")?;
	cmd.arg("compile")
		.arg(tmp.path().join("page.j2"))
		.arg("--path")
		.arg(tmp.path())
		.arg("--no-color")
		.assert()
		.success();

	// Output lands relative to the redirect target, not the entry file.
	assert!(tmp.path().join("sub/out.html").exists());
	assert!(!tmp.path().join("out.html").exists());

	Ok(())
}

#[test]
fn compile_inert_directive_line_is_a_quiet_noop() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let source = tmp.path().join("draft.j2");
	std::fs::write(&source, "{# note: draft #}\n<h1>Hello</h1>\n")?;

	let mut cmd = Command::cargo_bin("jig")?;
	cmd.arg("compile")
		.arg(&source)
		.arg("--path")
		.arg(tmp.path())
		.arg("--no-color")
		.assert()
		.success()
		.stderr(predicates::str::contains("Created!").not())
		.stderr(predicates::str::contains("Error!").not());

	assert_eq!(std::fs::read_dir(tmp.path())?.count(), 1);

	Ok(())
}

#[test]
fn compile_missing_file_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let mut cmd = Command::cargo_bin("jig")?;
	cmd.arg("compile")
		.arg(tmp.path().join("missing.j2"))
		.arg("--path")
		.arg(tmp.path())
		.arg("--no-color")
		.assert()
		.failure()
		.stderr(predicates::str::contains("Error!"))
		.stderr(predicates::str::contains("missing.j2"));

	Ok(())
}

#[test]
fn compile_redirect_cycle_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("a.j2"), "{# main: b.j2 #}\n")?;
	std::fs::write(tmp.path().join("b.j2"), "{# main: a.j2 #}\n")?;

	let mut cmd = Command::cargo_bin("jig")?;
	cmd.arg("compile")
		.arg(tmp.path().join("a.j2"))
		.arg("--path")
		.arg(tmp.path())
		.arg("--no-color")
		.assert()
		.failure()
		.stderr(predicates::str::contains("cycle"));

	Ok(())
}

#[test]
fn notifications_can_be_silenced_by_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("jig.toml"), "display_notifications = false\n")?;
	let source = tmp.path().join("index.j2");
	std::fs::write(&source, "{# out: build/index.html #}\n<h1>Hello</h1>\n")?;

	let mut cmd = Command::cargo_bin("jig")?;
	cmd.arg("compile")
		.arg(&source)
		.arg("--path")
		.arg(tmp.path())
		.arg("--no-color")
		.assert()
		.success()
		// The transient indicator still shows; the detail line does not.
		.stderr(predicates::str::contains("Created!"))
		.stderr(predicates::str::contains("File created:").not());

	Ok(())
}

#[test]
fn compile_rejects_out_of_set_config_values() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("jig.toml"), "status_timeout = 5\n")?;
	let source = tmp.path().join("index.j2");
	std::fs::write(&source, "{# out: build/index.html #}\n<h1>Hello</h1>\n")?;

	let mut cmd = Command::cargo_bin("jig")?;
	cmd.arg("compile")
		.arg(&source)
		.arg("--path")
		.arg(tmp.path())
		.arg("--no-color")
		.assert()
		.failure()
		.stderr(predicates::str::contains("invalid value for `status_timeout`"));

	Ok(())
}
