use std::path::Path;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;

use serde::Deserialize;

use crate::JigError;
use crate::JigResult;

/// File name the configuration is loaded from.
pub const CONFIG_FILE: &str = "jig.toml";

/// Allowed values for `status_timeout`, in seconds.
pub const STATUS_TIMEOUTS: &[u64] = &[2, 4, 6, 8, 10];
/// Allowed values for `indent_size`.
pub const INDENT_SIZES: &[usize] = &[2, 4];

/// User configuration loaded from a `jig.toml` file.
///
/// ```toml
/// compile_on_save = true
/// display_notifications = true
/// status_timeout = 6
/// indent_size = 4
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
	/// Whether save events trigger compilation in watch mode. Defaults to
	/// `true`: unlike an always-on editor, a watch session is launched
	/// deliberately.
	#[serde(default = "default_compile_on_save")]
	pub compile_on_save: bool,
	/// Whether outcomes raise a persistent notification in addition to the
	/// transient status indicator.
	#[serde(default = "default_display_notifications")]
	pub display_notifications: bool,
	/// Seconds before the status indicator disappears.
	#[serde(default = "default_status_timeout")]
	pub status_timeout: u64,
	/// Spaces per indent level in pretty mode.
	#[serde(default = "default_indent_size")]
	pub indent_size: usize,
}

fn default_compile_on_save() -> bool {
	true
}

fn default_display_notifications() -> bool {
	true
}

fn default_status_timeout() -> u64 {
	6
}

fn default_indent_size() -> usize {
	4
}

impl Default for Config {
	fn default() -> Self {
		Self {
			compile_on_save: default_compile_on_save(),
			display_notifications: default_display_notifications(),
			status_timeout: default_status_timeout(),
			indent_size: default_indent_size(),
		}
	}
}

impl Config {
	/// Load the config from `jig.toml` at the given root directory.
	/// Returns `None` if the file does not exist.
	pub fn load(root: &Path) -> JigResult<Option<Config>> {
		let config_path = root.join(CONFIG_FILE);

		if !config_path.exists() {
			return Ok(None);
		}

		let content = std::fs::read_to_string(&config_path)?;
		let config: Config =
			toml::from_str(&content).map_err(|e| JigError::ConfigParse(e.to_string()))?;
		config.validate()?;

		Ok(Some(config))
	}

	/// Reject values outside the allowed sets.
	pub fn validate(&self) -> JigResult<()> {
		if !STATUS_TIMEOUTS.contains(&self.status_timeout) {
			return Err(JigError::ConfigValue {
				key: "status_timeout".to_string(),
				value: self.status_timeout.to_string(),
				allowed: allowed_list(STATUS_TIMEOUTS),
			});
		}
		if !INDENT_SIZES.contains(&self.indent_size) {
			return Err(JigError::ConfigValue {
				key: "indent_size".to_string(),
				value: self.indent_size.to_string(),
				allowed: allowed_list(INDENT_SIZES),
			});
		}

		Ok(())
	}
}

fn allowed_list<T: std::fmt::Display>(values: &[T]) -> String {
	values
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join(", ")
}

/// Shared handle to the live configuration snapshot.
///
/// The snapshot itself is immutable; a configuration change replaces the
/// whole `Arc`, so a reader holding a snapshot keeps a consistent value and
/// concurrent readers see either the old or the new config, never a torn
/// mix. Readers take one snapshot per request.
#[derive(Debug, Clone)]
pub struct ConfigHandle {
	inner: Arc<RwLock<Arc<Config>>>,
}

impl ConfigHandle {
	pub fn new(config: Config) -> Self {
		Self {
			inner: Arc::new(RwLock::new(Arc::new(config))),
		}
	}

	/// Load from `root`, falling back to defaults when `jig.toml` is
	/// absent.
	pub fn load_or_default(root: &Path) -> JigResult<Self> {
		let config = Config::load(root)?.unwrap_or_default();
		Ok(Self::new(config))
	}

	/// The current snapshot.
	pub fn snapshot(&self) -> Arc<Config> {
		let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
		Arc::clone(&guard)
	}

	/// Replace the snapshot wholesale.
	pub fn replace(&self, config: Config) {
		let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
		*guard = Arc::new(config);
	}

	/// Re-read `jig.toml` under `root` and swap in the new snapshot. On
	/// failure the previous snapshot stays in place.
	pub fn reload(&self, root: &Path) -> JigResult<()> {
		let config = Config::load(root)?.unwrap_or_default();
		self.replace(config);
		Ok(())
	}
}
