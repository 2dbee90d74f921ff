use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Resolve a directive path against the file it appeared in.
///
/// Relative targets resolve against the directory containing `base`;
/// absolute targets pass through unchanged apart from lexical
/// normalization. Pure: no filesystem access.
pub fn resolve(base: &Path, target: &str) -> PathBuf {
	let target = Path::new(target);

	if target.is_absolute() {
		return normalize(target);
	}

	match base.parent() {
		Some(dir) => normalize(&dir.join(target)),
		None => normalize(target),
	}
}

/// Fold `.` and `..` components without touching the filesystem.
///
/// A leading `..` on a relative path is kept; `..` at the root of an
/// absolute path is dropped, matching how the platform resolves it.
pub fn normalize(path: &Path) -> PathBuf {
	let mut normalized = PathBuf::new();

	for component in path.components() {
		match component {
			Component::CurDir => {}
			Component::ParentDir => {
				match normalized.components().next_back() {
					Some(Component::Normal(_)) => {
						normalized.pop();
					}
					Some(Component::RootDir | Component::Prefix(_)) => {}
					_ => normalized.push(".."),
				}
			}
			other => normalized.push(other.as_os_str()),
		}
	}

	normalized
}
