use crate::Compiled;
use crate::JigResult;

/// Where compilation outcomes surface for the user.
///
/// Implementations decide how the transient indicator and the persistent
/// notification are rendered; the orchestrator never talks to a terminal
/// directly.
pub trait NotificationSink {
	fn report_success(&mut self, message: &str);
	fn report_error(&mut self, message: &str);
}

/// Sink that swallows everything. Useful when no UI is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NotificationSink for NullSink {
	fn report_success(&mut self, _message: &str) {}

	fn report_error(&mut self, _message: &str) {}
}

/// Map a compilation outcome onto a sink.
///
/// An inert outcome is intentionally silent: a directive line without an
/// actionable key is not an error and raises nothing at all.
pub fn report_outcome(outcome: &JigResult<Compiled>, sink: &mut dyn NotificationSink) {
	match outcome {
		Ok(Compiled::Written { dest, .. }) => {
			sink.report_success(&format!("File created: {}", dest.display()));
		}
		Ok(Compiled::Inert) => {}
		Err(error) => sink.report_error(&error.to_string()),
	}
}
