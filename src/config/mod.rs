// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file in the config directory.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[display]` - Zoom step factor
//!
//! A missing file yields defaults. An unreadable or invalid file also yields
//! defaults, together with a warning for the caller to log.
//!
//! # Examples
//!
//! ```no_run
//! use image_viewer::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("using defaults: {warning}");
//! }
//! println!("zoom step: {}", config.zoom_factor());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Display and viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Multiplier applied by Zoom In (Zoom Out divides by it).
    #[serde(default = "default_zoom_factor", skip_serializing_if = "Option::is_none")]
    pub zoom_factor: Option<f32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            zoom_factor: default_zoom_factor(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Returns the configured zoom factor, clamped to the supported range.
    #[must_use]
    pub fn zoom_factor(&self) -> f32 {
        self.display
            .zoom_factor
            .filter(|f| f.is_finite())
            .unwrap_or(DEFAULT_ZOOM_FACTOR)
            .clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR)
    }
}

fn default_zoom_factor() -> Option<f32> {
    Some(DEFAULT_ZOOM_FACTOR)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
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
                        Some(format!("{}: {err}", path.display())),
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

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            display: DisplayConfig {
                zoom_factor: Some(1.5),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = [valid").expect("failed to write file");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn invalid_file_yields_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general]\ntheme_mode = \"pink\"\n")
            .expect("failed to write file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general]\nlanguage = \"fr\"\n")
            .expect("failed to write file");

        let (config, _) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_abs_diff_eq!(config.zoom_factor(), DEFAULT_ZOOM_FACTOR);
    }

    #[test]
    fn zoom_factor_is_clamped() {
        let mut config = Config::default();
        assert_abs_diff_eq!(config.zoom_factor(), DEFAULT_ZOOM_FACTOR);

        config.display.zoom_factor = Some(0.5);
        assert_abs_diff_eq!(config.zoom_factor(), MIN_ZOOM_FACTOR);

        config.display.zoom_factor = Some(100.0);
        assert_abs_diff_eq!(config.zoom_factor(), MAX_ZOOM_FACTOR);

        config.display.zoom_factor = Some(f32::NAN);
        assert_abs_diff_eq!(config.zoom_factor(), DEFAULT_ZOOM_FACTOR);
    }
}
