//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/fcc/config.toml` (or the platform-specific
//! equivalent). Configuration file values serve as defaults that can be
//! overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//! Colors additionally accept environment overrides, which win over the file.
//!
//! # Example config
//!
//! ```toml
//! dir = "~/backups"
//!
//! [scanning]
//! recursive = true
//! include_hidden = false
//!
//! [grouping]
//! min_prefix_length = 20
//! min_count = 2
//! max_count = 500
//!
//! [display]
//! dir_names = true
//! group_size = true
//! average_size = false
//! color = true
//!
//! [colors]
//! quote = "yellow"
//! directory = "blue"
//! file = "green"
//! background = "black"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Default directory to scan
    pub dir: Option<PathBuf>,

    /// Scanning options
    #[serde(default)]
    pub scanning: FileScanConfig,

    /// Grouping options
    #[serde(default)]
    pub grouping: FileGroupConfig,

    /// Display options
    #[serde(default)]
    pub display: FileDisplayConfig,

    /// Palette colors
    #[serde(default)]
    pub colors: FileColorConfig,
}

/// Scanning options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileScanConfig {
    /// Whether to descend into subdirectories
    pub recursive: Option<bool>,

    /// Whether to include hidden files and directories
    pub include_hidden: Option<bool>,
}

/// Grouping options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileGroupConfig {
    /// Minimum common prefix length
    pub min_prefix_length: Option<usize>,

    /// Smallest group size to report
    pub min_count: Option<usize>,

    /// Largest group size to report
    pub max_count: Option<usize>,
}

/// Display options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileDisplayConfig {
    /// Whether to prefix entries with their directory
    pub dir_names: Option<bool>,

    /// Whether to show group sizes
    pub group_size: Option<bool>,

    /// Whether to show average sizes instead of totals
    pub average_size: Option<bool>,

    /// Whether to colorize terminal output. Defaults to `true` when absent.
    pub color: Option<bool>,
}

/// Palette colors from the configuration file, as color names.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileColorConfig {
    /// Quote mark color
    pub quote: Option<String>,

    /// Directory name color
    pub directory: Option<String>,

    /// File name color
    pub file: Option<String>,

    /// Background color
    pub background: Option<String>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/fcc/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fcc").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// contains invalid TOML or unexpected fields.
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })
    }
}
