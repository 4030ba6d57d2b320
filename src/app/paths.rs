// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! The first of these wins: a path passed to
//! [`get_app_config_dir_with_override`], the `--config-dir` flag recorded by
//! [`init_cli_overrides`], the `SWIPEABLE_ELEMENT_CONFIG_DIR` variable, then
//! the platform config directory.

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "SwipeableElement";

/// Environment variable naming a config directory. Ignored when empty.
pub const ENV_CONFIG_DIR: &str = "SWIPEABLE_ELEMENT_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument. Called once from `main`.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override already initialized");
    }
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn platform_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME))
}

/// Config directory without an explicit override.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(|| CLI_CONFIG_DIR.get().cloned().flatten())
        .or_else(env_config_dir)
        .or_else(platform_config_dir)
}
