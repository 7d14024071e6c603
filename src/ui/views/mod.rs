pub mod diff;
pub mod install;

use std::path::Path;

/// `path` relative to the project root when it lives inside it.
pub(crate) fn display_path(path: &Path, cwd: &Path) -> String {
    path.strip_prefix(cwd).unwrap_or(path).display().to_string()
}
