// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[toasts]` - Toast lifecycle timing and stacking geometry
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.toasts.default_duration_ms = 4000;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Toast lifecycle and stacking settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToastConfig {
    /// Auto-dismiss duration applied when a caller does not specify one.
    pub default_duration_ms: u64,
    /// Delay between a hide and the "hidden" event.
    pub grace_delay_ms: u64,
    /// Extra delay before the factory forces removal of a hidden toast.
    pub removal_delay_ms: u64,
    /// Auto-dismiss duration for toasts raised from response errors.
    pub error_duration_ms: u64,
    /// Gap between stacked toasts.
    pub gap: f32,
    /// Distance between the anchor edge and the nearest toast.
    pub base_offset: f32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: DEFAULT_DURATION_MS,
            grace_delay_ms: DEFAULT_GRACE_DELAY_MS,
            removal_delay_ms: DEFAULT_REMOVAL_DELAY_MS,
            error_duration_ms: DEFAULT_ERROR_DURATION_MS,
            gap: DEFAULT_STACK_GAP,
            base_offset: DEFAULT_BASE_OFFSET,
        }
    }
}

impl ToastConfig {
    /// Returns the grace delay as a `Duration`.
    #[must_use]
    pub fn grace_delay(&self) -> Duration {
        Duration::from_millis(self.grace_delay_ms.min(MAX_DELAY_MS))
    }

    /// Returns the defensive removal delay as a `Duration`.
    #[must_use]
    pub fn removal_delay(&self) -> Duration {
        Duration::from_millis(self.removal_delay_ms.min(MAX_DELAY_MS))
    }

    /// Returns the stacking gap, clamped to the supported range.
    ///
    /// Non-finite values fall back to the default.
    #[must_use]
    pub fn clamped_gap(&self) -> f32 {
        clamp_or_default(self.gap, MAX_STACK_GAP, DEFAULT_STACK_GAP)
    }

    /// Returns the base offset, clamped to the supported range.
    #[must_use]
    pub fn clamped_base_offset(&self) -> f32 {
        clamp_or_default(self.base_offset, MAX_BASE_OFFSET, DEFAULT_BASE_OFFSET)
    }
}

fn clamp_or_default(value: f32, max: f32, default: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, max)
    } else {
        default
    }
}

/// Root configuration, one field per TOML section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub toasts: ToastConfig,
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_default_config_path() -> Option<PathBuf> {
    paths::config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default location.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from `override_dir` when given, else the default location.
pub fn load_with_override(override_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = paths::config_dir_with_override(override_dir).map(|d| d.join(CONFIG_FILE))
    else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            let warning = format!("{}: {err}", path.display());
            tracing::warn!(%warning, "falling back to default configuration");
            (Config::default(), Some(warning))
        }
    }
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    match get_default_config_path() {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config("no config directory available".into())),
    }
}

/// Loads a configuration file from an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves a configuration file to an explicit path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
