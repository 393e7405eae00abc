// SPDX-License-Identifier: MPL-2.0
//! Viewer settings read from `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Logging filter
//! - `[history]` - Gesture history buffer size
//! - `[[pages]]` - Static page list (falls back to the reference catalog)
//!
//! The directory is the `--config-dir` value if given, else
//! `MAGAZINE_LENS_CONFIG_DIR`, else `MagazineLens/` under the platform config
//! directory. See [`config_dir`].
//!
//! ```no_run
//! use magazine_lens::config;
//!
//! let (config, _warning) = config::load(None);
//! assert!(config.history_capacity() > 0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::catalog::{PageCatalog, PageEntry};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Directory name under the platform config directory.
const APP_DIR: &str = "MagazineLens";

/// Environment variable naming the settings directory.
pub const ENV_CONFIG_DIR: &str = "MAGAZINE_LENS_CONFIG_DIR";

/// Warning key returned by [`load`] when the settings file exists but is unreadable.
pub const CONFIG_LOAD_WARNING: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Tracing filter directive (e.g. `magazine_lens=debug`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

/// Gesture history settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryConfig {
    /// Number of gesture records retained.
    #[serde(
        default = "default_history_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub capacity: Option<usize>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Viewer configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gesture history settings.
    #[serde(default)]
    pub history: HistoryConfig,

    /// Page list. Empty means "use the reference catalog".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<PageEntry>,
}

impl Config {
    /// Returns the tracing filter to install, falling back to the default.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.general
            .log_filter
            .as_deref()
            .unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Returns the gesture history capacity, clamped to its valid range.
    #[must_use]
    pub fn history_capacity(&self) -> usize {
        self.history
            .capacity
            .unwrap_or(DEFAULT_HISTORY_CAPACITY)
            .clamp(MIN_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY)
    }

    /// Builds the page catalog described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured page list contains duplicate ids.
    pub fn catalog(&self) -> Result<PageCatalog> {
        if self.pages.is_empty() {
            return Ok(PageCatalog::reference());
        }
        PageCatalog::from_entries(self.pages.iter().cloned())
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_history_capacity() -> Option<usize> {
    Some(DEFAULT_HISTORY_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the directory holding `settings.toml`.
///
/// `None` only when no directory was given and the platform has no config
/// directory.
#[must_use]
pub fn config_dir(cli_dir: Option<PathBuf>) -> Option<PathBuf> {
    resolve_config_dir(cli_dir, std::env::var_os(ENV_CONFIG_DIR))
}

// An empty env value counts as unset.
fn resolve_config_dir(cli_dir: Option<PathBuf>, env_dir: Option<OsString>) -> Option<PathBuf> {
    cli_dir
        .or_else(|| env_dir.filter(|dir| !dir.is_empty()).map(PathBuf::from))
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR)))
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads `settings.toml` from the directory [`config_dir`] resolves.
///
/// A missing file yields the defaults silently. An unreadable one yields the
/// defaults plus [`CONFIG_LOAD_WARNING`].
#[must_use]
pub fn load(cli_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_dir(cli_dir).map(|dir| dir.join(CONFIG_FILE)) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (Config::default(), Some(CONFIG_LOAD_WARNING.to_string())),
    }
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
