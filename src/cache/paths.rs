// Cache path utilities.
// Resolves the user-scoped location of the gitmoji cache file.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

/// Directory name under `~/.config`.
pub const APP_DIR: &str = "gitmoji-cache";

/// File name of the cached list.
pub const CACHE_FILE: &str = "gitmoji.json";

/// Get the configuration directory (~/.config/gitmoji-cache).
pub fn config_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| config_dir_in(dirs.home_dir()))
}

/// Path to the gitmoji cache file.
pub fn cache_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CACHE_FILE))
}

fn config_dir_in(home: &Path) -> PathBuf {
    home.join(".config").join(APP_DIR)
}

/// Temporary sibling used while replacing `path`.
pub(crate) fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
