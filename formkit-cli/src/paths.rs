//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "formkit";
const APPLICATION: &str = "formkit";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory, where logs live.
///
/// - Linux: `$XDG_CACHE_HOME/formkit` or `~/.cache/formkit`
/// - macOS: `~/Library/Caches/dev.formkit.formkit`
/// - Windows: `C:\Users\<User>\AppData\Local\formkit\formkit\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/formkit` or `~/.config/formkit`
/// - macOS: `~/Library/Application Support/dev.formkit.formkit`
/// - Windows: `C:\Users\<User>\AppData\Roaming\formkit\formkit\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path of the form config used when `--config` is omitted.
pub fn default_form_config() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("form.json"))
}

/// Get the path of the log file. Each run truncates it.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("latest.log"))
}
