// SPDX-License-Identifier: MPL-2.0
use swipeable_element::config::{self, Config, GeneralConfig, DEFAULT_LOOP_ANIMATION_MS};
use swipeable_element::domain::swipe::LoopDuration;
use swipeable_element::i18n::fluent::I18n;
use tempfile::tempdir;

fn config_with_language(language: &str) -> Config {
    Config {
        general: GeneralConfig {
            language: Some(language.to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    }
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    config::save_to_path(&config_with_language("en-US"), &temp_config_file_path)
        .expect("Failed to write initial config file");
    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    config::save_to_path(&config_with_language("fr"), &temp_config_file_path)
        .expect("Failed to write french config file");
    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_language_wins_over_config() {
    let i18n = I18n::new(Some("en-US".to_string()), &config_with_language("fr"));
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn hand_written_settings_file_is_honored() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r##"
[general]
theme_mode = "light"

[swipe]
loop_animation_ms = 3500
loader_color = "#336699"

[demo]
finished_display_ms = 500
"##,
    )
    .expect("Failed to write settings");

    let config = config::load_from_path(&path).expect("settings should parse");

    assert_eq!(config.loop_duration(), LoopDuration::new(3500));
    assert_eq!(config.loader_color(), iced::Color::from_rgb8(0x33, 0x66, 0x99));
    assert_eq!(config.finished_display().as_millis(), 500);
    assert_eq!(config.mock_latency().as_millis(), 1_000);
}

#[test]
fn corrupted_settings_fall_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[swipe\nloop = ")
        .expect("Failed to write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_some());
    assert_eq!(config.loop_duration().millis(), DEFAULT_LOOP_ANIMATION_MS);
}
