//! Configuration for the navigator.
//!
//! Settings are plain serde data with a default for every field, so a config
//! file only needs the keys it changes. Configuration can be loaded from TOML
//! files or built in code.
//!
//! # Example
//!
//! ```
//! use worldnav::config::Config;
//!
//! let config = Config::default();
//! assert!(config.report_parse_errors);
//! assert!(!config.trace_lookups);
//!
//! let custom = Config {
//!     trace_lookups: true,
//!     ..Config::default()
//! };
//! assert!(custom.trace_lookups);
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Navigator settings.
///
/// # Fields
///
/// * `report_parse_errors` - Hand unparsable paths to the diagnostics sink (default: true)
/// * `trace_lookups` - Log each resolution miss at debug level (default: false)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Hand unparsable paths to the diagnostics sink
    #[serde(default = "default_report_parse_errors")]
    pub report_parse_errors: bool,

    /// Log which step of a lookup missed
    #[serde(default)]
    pub trace_lookups: bool,
}

/// Returns the default for reporting parse errors.
fn default_report_parse_errors() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_parse_errors: default_report_parse_errors(),
            trace_lookups: false,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/worldnav/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("worldnav");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!(path = %config_path.display(), %error, "ignoring unreadable config");
                Self::default()
            }
        }
    }

    /// Loads configuration from a specific TOML file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).context("Failed to parse config")
    }

    /// Saves configuration to a TOML file, creating parent directories.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.report_parse_errors);
        assert!(!config.trace_lookups);
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let config = Config::from_toml_str("trace_lookups = true").unwrap();
        assert!(config.report_parse_errors);
        assert!(config.trace_lookups);

        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Config::from_toml_str("report_parse_errors = maybe").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            report_parse_errors: false,
            trace_lookups: true,
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_config_path_location() {
        if let Some(path) = Config::config_path() {
            assert!(path.ends_with(".config/worldnav/config.toml"));
        }
    }
}
