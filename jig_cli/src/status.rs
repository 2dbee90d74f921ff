use std::time::Duration;
use std::time::Instant;

use jig_core::ConfigHandle;
use jig_core::NotificationSink;
use owo_colors::OwoColorize;

/// What the transient indicator is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
	Success,
	Error,
}

/// Transient status indicator state.
///
/// The indicator shows the latest outcome and expires after the configured
/// timeout; a new outcome restarts the clock. The terminal has no timer of
/// its own, so expiry is evaluated lazily whenever the state is read.
#[derive(Debug, Default)]
pub struct StatusView {
	current: Option<(Status, Instant)>,
}

impl StatusView {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn show_success(&mut self, timeout: Duration) {
		self.current = Some((Status::Success, Instant::now() + timeout));
	}

	pub fn show_error(&mut self, timeout: Duration) {
		self.current = Some((Status::Error, Instant::now() + timeout));
	}

	/// The visible status, or `None` once the timeout has passed.
	pub fn current(&self) -> Option<Status> {
		let (status, expiry) = self.current?;
		(Instant::now() < expiry).then_some(status)
	}

	pub fn hide(&mut self) {
		self.current = None;
	}
}

/// Terminal implementation of the notification sink.
///
/// The short indicator always prints; the detail line only prints when
/// `display_notifications` is enabled. Both read a fresh configuration
/// snapshot at call time, so a configuration change applies to the next
/// report rather than the one in flight. Everything goes to stderr,
/// keeping stdout clean for rendered markup.
pub struct ConsoleSink {
	view: StatusView,
	config: ConfigHandle,
	color: bool,
}

impl ConsoleSink {
	pub fn new(config: ConfigHandle, color: bool) -> Self {
		Self {
			view: StatusView::new(),
			config,
			color,
		}
	}

	pub fn view(&self) -> &StatusView {
		&self.view
	}

	pub fn view_mut(&mut self) -> &mut StatusView {
		&mut self.view
	}

	fn indicator(&self, status: Status) -> String {
		match (status, self.color) {
			(Status::Success, true) => format!("{}", "✔ Created!".green()),
			(Status::Success, false) => "✔ Created!".to_string(),
			(Status::Error, true) => format!("{}", "✘ Error!".red()),
			(Status::Error, false) => "✘ Error!".to_string(),
		}
	}
}

impl NotificationSink for ConsoleSink {
	fn report_success(&mut self, message: &str) {
		let config = self.config.snapshot();
		self.view
			.show_success(Duration::from_secs(config.status_timeout));

		eprintln!("{}", self.indicator(Status::Success));
		if config.display_notifications {
			eprintln!("  {message}");
		}
	}

	fn report_error(&mut self, message: &str) {
		let config = self.config.snapshot();
		self.view
			.show_error(Duration::from_secs(config.status_timeout));

		eprintln!("{}", self.indicator(Status::Error));
		if config.display_notifications {
			eprintln!("  {message}");
		}
	}
}
