use std::path::Path;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use jig_core::AnyResult;
use jig_core::Compiled;
use jig_core::CompileEmitter;
use jig_core::ConfigHandle;
use jig_core::NotificationSink;
use jig_core::compile_file;
use jig_core::config::CONFIG_FILE;
use jig_core::is_template_file;
use jig_core::report_outcome;
use notify::Watcher;

use crate::status::ConsoleSink;

/// A live watch session.
///
/// `start` acquires, in order, the event emitter, the filesystem watcher
/// subscription, and the status sink; `stop` releases them in the same
/// order and tolerates resources that were never acquired (or were already
/// released), so it is safe to call twice.
pub struct Session {
	watch_dir: PathBuf,
	root: PathBuf,
	config: ConfigHandle,
	emitter: CompileEmitter,
	watcher: Option<notify::RecommendedWatcher>,
	rx: Option<mpsc::Receiver<Vec<PathBuf>>>,
	sink: ConsoleSink,
	verbose: bool,
}

impl Session {
	/// Begin watching `watch_dir` for saves. `root` is where `jig.toml`
	/// lives and is re-read whenever that file is saved.
	pub fn start(
		watch_dir: PathBuf,
		root: PathBuf,
		config: ConfigHandle,
		sink: ConsoleSink,
		verbose: bool,
	) -> AnyResult<Self> {
		let emitter = CompileEmitter::new();

		let (tx, rx) = mpsc::channel();
		let mut watcher =
			notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
				if let Ok(event) = res {
					if matches!(
						event.kind,
						notify::EventKind::Modify(_) | notify::EventKind::Create(_)
					) {
						let _ = tx.send(event.paths);
					}
				}
			})?;
		watcher.watch(&watch_dir, notify::RecursiveMode::Recursive)?;

		Ok(Self {
			watch_dir,
			root,
			config,
			emitter,
			watcher: Some(watcher),
			rx: Some(rx),
			sink,
			verbose,
		})
	}

	/// Subscribe to compile events before calling [`Session::run`].
	pub fn emitter_mut(&mut self) -> &mut CompileEmitter {
		&mut self.emitter
	}

	/// Block on save events until the watcher goes away.
	pub fn run(&mut self) {
		println!(
			"Watching {} for template changes... (press Ctrl+C to stop)",
			self.watch_dir.display()
		);

		let Some(rx) = self.rx.take() else {
			return;
		};

		while let Ok(mut pending) = rx.recv() {
			// Debounce: drain additional events within 200ms.
			while let Ok(more) = rx.recv_timeout(Duration::from_millis(200)) {
				pending.extend(more);
			}
			pending.sort();
			pending.dedup();

			for path in pending {
				self.handle_save(&path);
			}
		}
	}

	/// React to one saved path: a config swap, a template compile, or
	/// nothing. Failures report through the sink and never end the
	/// session.
	pub fn handle_save(&mut self, path: &Path) {
		if path.file_name().and_then(|name| name.to_str()) == Some(CONFIG_FILE) {
			match self.config.reload(&self.root) {
				Ok(()) => {
					if self.verbose {
						eprintln!("configuration reloaded");
					}
				}
				Err(error) => self.sink.report_error(&error.to_string()),
			}
			return;
		}

		if !is_template_file(path) {
			return;
		}
		if !self.config.snapshot().compile_on_save {
			return;
		}

		if self.verbose {
			eprintln!("change detected: {}", path.display());
		}

		let outcome = compile_file(path, &self.config.snapshot());
		if let Ok(Compiled::Written { source, .. }) = &outcome {
			self.emitter.emit_did_compile_file(source);
		}
		report_outcome(&outcome, &mut self.sink);
	}

	/// Release everything: subscribers first, then the watcher
	/// subscription, then the status indicator.
	pub fn stop(&mut self) {
		self.emitter.clear();
		self.rx = None;
		self.watcher = None;
		self.sink.view_mut().hide();
	}
}

impl Drop for Session {
	fn drop(&mut self) {
		self.stop();
	}
}
