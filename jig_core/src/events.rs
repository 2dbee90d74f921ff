use std::path::Path;

type CompileCallback = Box<dyn Fn(&Path)>;

/// Fire-and-forget event emitter for compilation results.
///
/// Subscribers are notification consumers, not processing stages: there is
/// no queue and no backpressure, and the only payload is the path
/// involved. `did_compile_file` fires after a successful file write;
/// `did_compile_direct` after a successful direct render.
#[derive(Default)]
pub struct CompileEmitter {
	did_compile_file: Vec<CompileCallback>,
	did_compile_direct: Vec<CompileCallback>,
}

impl CompileEmitter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Run `callback` after every successful file compile.
	pub fn on_did_compile_file(&mut self, callback: impl Fn(&Path) + 'static) {
		self.did_compile_file.push(Box::new(callback));
	}

	/// Run `callback` after every successful direct compile.
	pub fn on_did_compile_direct(&mut self, callback: impl Fn(&Path) + 'static) {
		self.did_compile_direct.push(Box::new(callback));
	}

	pub fn emit_did_compile_file(&self, path: &Path) {
		for callback in &self.did_compile_file {
			callback(path);
		}
	}

	pub fn emit_did_compile_direct(&self, path: &Path) {
		for callback in &self.did_compile_direct {
			callback(path);
		}
	}

	/// Drop every subscriber. Part of session teardown.
	pub fn clear(&mut self) {
		self.did_compile_file.clear();
		self.did_compile_direct.clear();
	}
}
