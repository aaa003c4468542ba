//! Filesystem locations
//!
//! ```text
//! ~/.elfproef/
//! └── config.toml        # logging and calendar settings
//! ```
//!
//! `$ELFPROEF_CONFIG` overrides the config file path.

use std::path::PathBuf;

/// Environment variable overriding the config file path
pub const CONFIG_ENV: &str = "ELFPROEF_CONFIG";

/// Config directory name under the home directory
const CONFIG_DIR: &str = ".elfproef";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the config directory.
///
/// Returns `~/.elfproef/`.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(CONFIG_DIR)
}

/// Get the config file path.
///
/// `$ELFPROEF_CONFIG` if set and non-empty, `~/.elfproef/config.toml` otherwise.
#[must_use]
pub fn config_file() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map_or_else(|| config_dir().join(CONFIG_FILE), PathBuf::from)
}
