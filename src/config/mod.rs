// SPDX-License-Identifier: MPL-2.0
//! Loading and saving the `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[layout]` - Axis of the panel stack
//! - `[transition]` - Step duration, scale, slide distance and easing
//!
//! # Path Resolution
//!
//! See [`crate::paths`]: explicit override, then `--config-dir`, then
//! `PANEL_STACK_CONFIG_DIR`, then the platform config directory.
//!
//! # Examples
//!
//! ```no_run
//! use panel_stack::config;
//!
//! let (mut config, _warning) = config::load();
//! config.transition.duration_ms = Some(150);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::panel_stack::{Axis, Easing, TransitionSettings};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LayoutConfig {
    /// Axis along which panels slide.
    #[serde(default)]
    pub axis: Axis,
}

/// Transition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransitionConfig {
    /// Length of one transition step in milliseconds.
    #[serde(default = "default_duration_ms", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,

    /// Scale factor of the departing and arriving panel.
    #[serde(default = "default_scale", skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,

    /// Slide distance in logical pixels.
    #[serde(default = "default_distance", skip_serializing_if = "Option::is_none")]
    pub distance: Option<f32>,

    /// Easing curve of each step.
    #[serde(default)]
    pub easing: Easing,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            scale: default_scale(),
            distance: default_distance(),
            easing: Easing::default(),
        }
    }
}

impl TransitionConfig {
    /// Builds clamped transition settings, filling gaps with defaults.
    #[must_use]
    pub fn to_settings(&self) -> TransitionSettings {
        TransitionSettings::new(
            Duration::from_millis(self.duration_ms.unwrap_or(DEFAULT_DURATION_MS)),
            self.scale.unwrap_or(DEFAULT_SCALE),
            self.distance.unwrap_or(DEFAULT_DISTANCE),
            self.easing,
        )
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub transition: TransitionConfig,
}

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_DURATION_MS)
}

fn default_scale() -> Option<f32> {
    Some(DEFAULT_SCALE)
}

fn default_distance() -> Option<f32> {
    Some(DEFAULT_DISTANCE)
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {}", path.display(), err)),
                    );
                }
            }
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
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
