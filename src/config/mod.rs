// SPDX-License-Identifier: MPL-2.0
//! This module handles the viewer configuration stored in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[display]` - Fit-to-window default and viewer background
//! - `[window]` - Initial window size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()` (the `--config-dir` flag)
//! 3. Set `LENS_PANE_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use lens_pane::config;
//!
//! let (mut config, _warning) = config::load();
//! config.display.fit_to_window = Some(true);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "LensPane";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "LENS_PANE_CONFIG_DIR";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundTheme {
    Light,
    #[default]
    Dark,
}

/// Display and viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DisplayConfig {
    /// Whether to start in fit-to-window mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_to_window: Option<bool>,

    /// Viewer background theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundTheme>,
}

/// Initial window geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: u32,
    #[serde(default = "default_window_height")]
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_DEFAULT_WIDTH,
            height: WINDOW_DEFAULT_HEIGHT,
        }
    }
}

fn default_window_width() -> u32 {
    WINDOW_DEFAULT_WIDTH
}

fn default_window_height() -> u32 {
    WINDOW_DEFAULT_HEIGHT
}

/// Viewer configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

impl Config {
    /// Window size clamped to the supported minimum.
    #[must_use]
    pub fn window_size(&self) -> (u32, u32) {
        (
            self.window.width.max(MIN_WINDOW_WIDTH),
            self.window.height.max(MIN_WINDOW_HEIGHT),
        )
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honoring an explicit override first and then
/// the environment variable before falling back to the platform directory.
fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning describing what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(err) => (
                    Config::default(),
                    Some(format!("{}: {}", path.display(), err)),
                ),
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = config_path_with_override(None) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
