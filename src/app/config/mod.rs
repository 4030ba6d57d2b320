// SPDX-License-Identifier: MPL-2.0
//! This module handles the demo's configuration, loaded from and saved to a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[swipe]` - Idle-loop length and loader color
//! - `[demo]` - Simulated confirmation call timings
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `SWIPEABLE_ELEMENT_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use swipeable_element::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.swipe.loop_animation_ms = Some(1500);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::swipe::LoopDuration;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

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

/// Swipeable element settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwipeConfig {
    /// Length of one idle-loop iteration in milliseconds.
    #[serde(
        default = "default_loop_animation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub loop_animation_ms: Option<u64>,

    /// Spinner color: `white`, `black`, `#rgb`, `#rrggbb` or `#rrggbbaa`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loader_color: Option<String>,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            loop_animation_ms: default_loop_animation_ms(),
            loader_color: None,
        }
    }
}

/// Timings of the simulated confirmation call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoConfig {
    #[serde(
        default = "default_mock_latency_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub mock_latency_ms: Option<u64>,

    #[serde(
        default = "default_finished_display_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub finished_display_ms: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            mock_latency_ms: default_mock_latency_ms(),
            finished_display_ms: default_finished_display_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub swipe: SwipeConfig,

    #[serde(default)]
    pub demo: DemoConfig,
}

impl Config {
    /// Idle-loop length, clamped to the supported range.
    #[must_use]
    pub fn loop_duration(&self) -> LoopDuration {
        LoopDuration::new(
            self.swipe
                .loop_animation_ms
                .unwrap_or(DEFAULT_LOOP_ANIMATION_MS),
        )
    }

    /// Spinner color. Unparseable values fall back to the default.
    #[must_use]
    pub fn loader_color(&self) -> Color {
        let raw = self
            .swipe
            .loader_color
            .as_deref()
            .unwrap_or(DEFAULT_LOADER_COLOR);

        parse_color(raw).unwrap_or_else(|err| {
            tracing::warn!(%err, "using default loader color");
            Color::WHITE
        })
    }

    #[must_use]
    pub fn mock_latency(&self) -> Duration {
        let millis = self
            .demo
            .mock_latency_ms
            .unwrap_or(DEFAULT_MOCK_LATENCY_MS)
            .min(MAX_MOCK_LATENCY_MS);
        Duration::from_millis(millis)
    }

    #[must_use]
    pub fn finished_display(&self) -> Duration {
        let millis = self
            .demo
            .finished_display_ms
            .unwrap_or(DEFAULT_FINISHED_DISPLAY_MS)
            .min(MAX_FINISHED_DISPLAY_MS);
        Duration::from_millis(millis)
    }
}

#[allow(clippy::unnecessary_wraps)]
fn default_loop_animation_ms() -> Option<u64> {
    Some(DEFAULT_LOOP_ANIMATION_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_mock_latency_ms() -> Option<u64> {
    Some(DEFAULT_MOCK_LATENCY_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_finished_display_ms() -> Option<u64> {
    Some(DEFAULT_FINISHED_DISPLAY_MS)
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
// Color Parsing
// =============================================================================

/// Parses a named color or a `#`-prefixed hex color.
pub fn parse_color(raw: &str) -> Result<Color> {
    let value = raw.trim();

    match value.to_ascii_lowercase().as_str() {
        "white" => return Ok(Color::WHITE),
        "black" => return Ok(Color::BLACK),
        _ => {}
    }

    let invalid = || Error::Config(format!("invalid color: {raw}"));
    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    let short = |c: &str| channel(&c.repeat(2));

    match hex.len() {
        3 => Ok(Color::from_rgb8(
            short(&hex[0..1])?,
            short(&hex[1..2])?,
            short(&hex[2..3])?,
        )),
        6 => Ok(Color::from_rgb8(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        8 => Ok(Color::from_rgba8(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            f32::from(channel(&hex[6..8])?) / 255.0,
        )),
        _ => Err(invalid()),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            swipe: SwipeConfig {
                loop_animation_ms: Some(1500),
                loader_color: Some("#ff8800".to_string()),
            },
            demo: DemoConfig {
                mock_latency_ms: Some(250),
                finished_display_ms: Some(500),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n").expect("valid toml");

        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.swipe, SwipeConfig::default());
        assert_eq!(config.demo, DemoConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"Dark\"\n").expect("valid toml");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn invalid_theme_mode_is_an_error() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_with_override_without_file_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_some(), "should warn about parse error");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_then_load_with_override() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().join("cfg");
        let mut config = Config::default();
        config.swipe.loop_animation_ms = Some(900);

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded.loop_duration(), LoopDuration::new(900));
    }

    #[test]
    fn loop_duration_is_clamped() {
        let mut config = Config::default();
        config.swipe.loop_animation_ms = Some(0);
        assert_eq!(config.loop_duration().millis(), MIN_LOOP_ANIMATION_MS);

        config.swipe.loop_animation_ms = None;
        assert_eq!(config.loop_duration().millis(), DEFAULT_LOOP_ANIMATION_MS);
    }

    #[test]
    fn demo_timings_are_capped() {
        let mut config = Config::default();
        assert_eq!(config.mock_latency(), Duration::from_millis(1_000));
        assert_eq!(config.finished_display(), Duration::from_millis(2_000));

        config.demo.mock_latency_ms = Some(u64::MAX);
        assert_eq!(
            config.mock_latency(),
            Duration::from_millis(MAX_MOCK_LATENCY_MS)
        );
    }

    #[test]
    fn parse_named_colors() {
        assert_eq!(parse_color("white"), Ok(Color::WHITE));
        assert_eq!(parse_color(" Black "), Ok(Color::BLACK));
    }

    #[test]
    fn parse_hex_colors() {
        assert_eq!(parse_color("#ffffff"), Ok(Color::WHITE));
        assert_eq!(parse_color("#000"), Ok(Color::BLACK));
        assert_eq!(
            parse_color("#33333380"),
            Ok(Color::from_rgba8(0x33, 0x33, 0x33, 128.0 / 255.0))
        );
    }

    #[test]
    fn reject_malformed_colors() {
        for raw in ["", "ffffff", "#ff", "#gggggg", "#fffffff", "#ééé", "teal"] {
            assert!(
                matches!(parse_color(raw), Err(Error::Config(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn invalid_loader_color_falls_back_to_white() {
        let mut config = Config::default();
        config.swipe.loader_color = Some("not-a-color".to_string());
        assert_eq!(config.loader_color(), Color::WHITE);

        config.swipe.loader_color = Some("#ff0000".to_string());
        assert_eq!(config.loader_color(), Color::from_rgb8(255, 0, 0));
    }
}
