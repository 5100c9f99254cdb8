// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[book]` - Where the page images live and how they are named
//! - `[display]` - Flip engine selection, page size and transition timing
//! - `[autoplay]` - Automatic page turning
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `FLIPBOOK_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use flipbook::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::book::PathRule;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// How many pages the flip engine shows at once.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    /// Cover alone, then two-page spreads.
    #[default]
    Double,
    /// One page at a time.
    Single,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Location and naming convention of the page images.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookConfig {
    /// Directory containing the page images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Number of pages including the cover. Discovered on disk when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<usize>,

    /// File name of the cover page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_file: Option<String>,

    /// Prefix of numbered page files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_prefix: Option<String>,

    /// Zero-padding width of numbered page files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pad_width: Option<usize>,

    /// Extension of numbered page files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    /// Per-page load timeout in milliseconds.
    #[serde(
        default = "default_load_timeout_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub load_timeout_ms: Option<u64>,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            directory: None,
            total_pages: None,
            cover_file: None,
            page_prefix: None,
            pad_width: None,
            extension: None,
            load_timeout_ms: default_load_timeout_ms(),
        }
    }
}

impl BookConfig {
    /// Builds the asset naming rule described by this section.
    pub fn path_rule(&self) -> PathRule {
        let directory = self
            .directory
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BOOK_DIRECTORY));
        PathRule::new(directory)
            .with_cover_file(
                self.cover_file
                    .clone()
                    .unwrap_or_else(|| DEFAULT_COVER_FILE.to_string()),
            )
            .with_prefix(
                self.page_prefix
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PAGE_PREFIX.to_string()),
            )
            .with_pad_width(self.pad_width.unwrap_or(DEFAULT_PAD_WIDTH))
            .with_extension(
                self.extension
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PAGE_EXTENSION.to_string()),
            )
    }

    /// Per-page load timeout, clamped to the supported range.
    pub fn load_timeout(&self) -> Duration {
        let ms = self
            .load_timeout_ms
            .unwrap_or(DEFAULT_LOAD_TIMEOUT_MS)
            .clamp(MIN_LOAD_TIMEOUT_MS, MAX_LOAD_TIMEOUT_MS);
        Duration::from_millis(ms)
    }
}

/// Flip engine and page geometry settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Registered name of the flip engine.
    #[serde(default = "default_engine", skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,

    /// Single or double page display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<DisplayMode>,

    /// Width of one page in logical pixels.
    #[serde(default = "default_page_width", skip_serializing_if = "Option::is_none")]
    pub page_width: Option<u32>,

    /// Height of one page in logical pixels.
    #[serde(default = "default_page_height", skip_serializing_if = "Option::is_none")]
    pub page_height: Option<u32>,

    /// Center the cover and back page instead of leaving an empty half.
    #[serde(default = "default_centered", skip_serializing_if = "Option::is_none")]
    pub centered: Option<bool>,

    /// Page-turn transition duration in milliseconds.
    #[serde(
        default = "default_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_ms: Option<u64>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            mode: Some(DisplayMode::default()),
            page_width: default_page_width(),
            page_height: default_page_height(),
            centered: default_centered(),
            transition_ms: default_transition_ms(),
        }
    }
}

/// Automatic page-turning settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AutoplayConfig {
    /// Start turning pages automatically once the book is ready.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Seconds between two automatic page turns.
    #[serde(
        default = "default_autoplay_interval_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval_secs: Option<u32>,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            enabled: Some(false),
            interval_secs: default_autoplay_interval_secs(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Page image location and naming.
    #[serde(default)]
    pub book: BookConfig,

    /// Flip engine and page geometry.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Automatic page turning.
    #[serde(default)]
    pub autoplay: AutoplayConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_load_timeout_ms() -> Option<u64> {
    Some(DEFAULT_LOAD_TIMEOUT_MS)
}

fn default_engine() -> Option<String> {
    Some(DEFAULT_ENGINE.to_string())
}

fn default_page_width() -> Option<u32> {
    Some(DEFAULT_PAGE_WIDTH)
}

fn default_page_height() -> Option<u32> {
    Some(DEFAULT_PAGE_HEIGHT)
}

fn default_centered() -> Option<bool> {
    Some(true)
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_autoplay_interval_secs() -> Option<u32> {
    Some(DEFAULT_AUTOPLAY_INTERVAL_SECS)
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

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
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
                    log::warn!("ignoring unreadable config {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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

// =============================================================================
// Save Functions
// =============================================================================

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

/// Saves configuration to a specific path.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            book: BookConfig {
                directory: Some(PathBuf::from("pages")),
                total_pages: Some(21),
                extension: Some("jpg".to_string()),
                ..BookConfig::default()
            },
            display: DisplayConfig {
                mode: Some(DisplayMode::Single),
                transition_ms: Some(250),
                ..DisplayConfig::default()
            },
            autoplay: AutoplayConfig {
                enabled: Some(true),
                interval_secs: Some(3),
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
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[book]\ntotal_pages = 12\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("partial config should load");
        assert_eq!(loaded.book.total_pages, Some(12));
        assert_eq!(loaded.book.load_timeout_ms, Some(DEFAULT_LOAD_TIMEOUT_MS));
        assert_eq!(loaded.display, DisplayConfig::default());
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn broken_file_yields_defaults_and_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_timeout_is_clamped() {
        let mut book = BookConfig::default();
        assert_eq!(book.load_timeout(), Duration::from_secs(30));

        book.load_timeout_ms = Some(1);
        assert_eq!(book.load_timeout(), Duration::from_millis(MIN_LOAD_TIMEOUT_MS));

        book.load_timeout_ms = Some(u64::MAX);
        assert_eq!(book.load_timeout(), Duration::from_millis(MAX_LOAD_TIMEOUT_MS));
    }

    #[test]
    fn path_rule_uses_configured_naming() {
        let book = BookConfig {
            directory: Some(PathBuf::from("scans")),
            extension: Some("jpg".to_string()),
            ..BookConfig::default()
        };
        let rule = book.path_rule();
        assert_eq!(rule.path_for(0), PathBuf::from("scans/page_000_cover.png"));
        assert_eq!(rule.path_for(7), PathBuf::from("scans/page_007.jpg"));
    }
}
