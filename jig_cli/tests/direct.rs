use assert_cmd::Command;
use jig_core::AnyEmptyResult;
use predicates::prelude::*;

#[test]
fn direct_renders_stdin_to_pretty_stdout() -> AnyEmptyResult {
	let mut cmd = Command::cargo_bin("jig")?;
	cmd.arg("direct")
		.arg("--no-color")
		.write_stdin("<div><p>Hi</p></div>")
		.assert()
		.success()
		.stdout(predicates::str::contains("<div>\n    <p>\n        Hi\n    </p>\n</div>\n"))
		.stderr(predicates::str::contains("Created HTML from template"));

	Ok(())
}

#[test]
fn direct_evaluates_template_expressions() -> AnyEmptyResult {
	let mut cmd = Command::cargo_bin("jig")?;
	cmd.arg("direct")
		.arg("--no-color")
		.write_stdin("<p>{{ 1 + 1 }}</p>")
		.assert()
		.success()
		.stdout(predicates::str::contains("2"));

	Ok(())
}

#[test]
fn direct_resolves_includes_via_source_flag() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("partial.j2"), "<p>hi</p>")?;

	let mut cmd = Command::cargo_bin("jig")?;
	cmd.arg("direct")
		.arg("--source")
		.arg(tmp.path().join("page.j2"))
		.arg("--path")
		.arg(tmp.path())
		.arg("--no-color")
		.write_stdin(r#"{% include "partial.j2" %}"#)
		.assert()
		.success()
		.stdout(predicates::str::contains("hi"));

	Ok(())
}

#[test]
fn direct_always_strips_html_comments() -> AnyEmptyResult {
	let mut cmd = Command::cargo_bin("jig")?;
	cmd.arg("direct")
		.arg("--no-color")
		.write_stdin("<div><!-- secret --><p>x</p></div>")
		.assert()
		.success()
		.stdout(predicates::str::contains("<!--").not());

	Ok(())
}

#[test]
fn direct_template_error_fails() -> AnyEmptyResult {
	let mut cmd = Command::cargo_bin("jig")?;
	cmd.arg("direct")
		.arg("--no-color")
		.write_stdin("{% if %}")
		.assert()
		.failure()
		.stderr(predicates::str::contains("Error!"));

	Ok(())
}
