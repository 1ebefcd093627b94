//! Configuration system for keytrail.
//!
//! This module provides the configuration structure for keytrail with sensible
//! defaults and support for serialization/deserialization via serde.
//! Configuration is loaded from a TOML file and individual values are
//! overridden by command-line arguments.
//!
//! # Example
//!
//! ```
//! use keytrail::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.default_value, "NO_VALUE");
//! assert_eq!(config.return_value, "all");
//!
//! // Create custom configuration
//! let custom = Config {
//!     return_value: "first".to_string(),
//!     indent_size: 4,
//!     ..Config::default()
//! };
//! ```

use crate::query::DEFAULT_MAX_DEPTH;
use serde::{Deserialize, Serialize};

/// Configuration for the keytrail command.
///
/// All fields have sensible defaults via `Config::default()`, and any field
/// missing from the config file falls back to its default.
///
/// # Fields
///
/// * `default_value` - Value returned when nothing matches (default: "NO_VALUE")
/// * `return_value` - Selection policy: "first", "last" or "all" (default: "all")
/// * `max_depth` - Nesting depth at which traversal stops (default: 256)
/// * `output_format` - Result format: "json", "yaml" or "raw" (default: "json")
/// * `indent_size` - Spaces per level in JSON output; 0 is compact (default: 2)
/// * `sort_search_results` - Order search matches by string form (default: false)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Value returned when nothing matches
    #[serde(default = "default_default_value")]
    pub default_value: String,

    /// Selection policy: "first", "last" or "all"
    #[serde(default = "default_return_value")]
    pub return_value: String,

    /// Nesting depth at which traversal stops
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Result format: "json", "yaml" or "raw"
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// Spaces per indentation level in JSON output
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Order search matches by their string form before selecting
    #[serde(default)]
    pub sort_search_results: bool,
}

fn default_default_value() -> String {
    "NO_VALUE".to_string()
}

fn default_return_value() -> String {
    "all".to_string()
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_output_format() -> String {
    "json".to_string()
}

fn default_indent_size() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_value: default_default_value(),
            return_value: default_return_value(),
            max_depth: default_max_depth(),
            output_format: default_output_format(),
            indent_size: default_indent_size(),
            sort_search_results: false,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/keytrail/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("keytrail");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from a specific file, falling back to defaults
    /// if it is missing, unreadable or not valid TOML.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), %err, "ignoring invalid config file");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<std::path::PathBuf> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Saves configuration to a specific file.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;

        Ok(())
    }
}
