//! Path resolution utilities.

use crate::env;
use crate::error::ConfigError;
use std::path::PathBuf;

/// Environment variable that overrides the base directory.
pub const HOME_ENV: &str = "SEQUENTIAL_HOME";

/// Get the Sequential base directory.
///
/// `SEQUENTIAL_HOME` takes precedence when set; otherwise the directory is
/// `~/.sequential`.
pub fn base_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = env::get_var(HOME_ENV) {
        return Ok(expand_tilde(&dir));
    }
    let home = dirs::home_dir().ok_or_else(|| {
        ConfigError::Validation("Could not determine home directory".to_string())
    })?;
    Ok(home.join(".sequential"))
}

/// Get the main config file path (`<base>/sequential.json5`).
pub fn config_file() -> Result<PathBuf, ConfigError> {
    Ok(base_dir()?.join("sequential.json5"))
}

/// Expand tilde (~) in a path.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(&path[2..]);
        }
    }
    PathBuf::from(path)
}
