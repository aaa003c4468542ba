//! Configuration
//!
//! Settings for the helpers around the checksum core: log prefixes and
//! business-calendar defaults. The eleven-test itself takes no
//! configuration.
//!
//! The file is TOML, read from `$ELFPROEF_CONFIG` when set and from
//! `~/.elfproef/config.toml` otherwise. A missing file yields the defaults.
//!
//! ```toml
//! [logging]
//! acronym = "ABC"
//! context_template = "pid={pid} tid={tid}"
//!
//! [calendar]
//! time_schedule = "Kantooruren"
//! time_zone = "Europe/Amsterdam"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::ports::CalendarDefaults;
use crate::paths;

/// Errors while loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read or written
    #[error("config io error at {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("invalid config at {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// The configuration could not be serialised
    #[error("cannot serialise config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log message prefixes
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Business-calendar fallbacks
    #[serde(default)]
    pub calendar: CalendarDefaults,
}

/// Log prefix settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Application acronym shown as the first prefix segment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
    /// Template for the runtime context segment, with `{pid}`, `{tid}`, `{uid}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_template: Option<String>,
}

impl Config {
    /// Path the configuration is read from
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::config_file()
    }

    /// Load from the default location
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load from `path`, defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Write to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)
    }
}
