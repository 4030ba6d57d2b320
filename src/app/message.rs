// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::swipeable;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Swipe(swipeable::Message),
    /// The confirmation call started by a top swipe returned.
    ConfirmationCompleted(Result<(), Error>),
    /// The finished view has been shown long enough.
    FinishedElapsed,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SWIPEABLE_ELEMENT_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional idle-loop length overriding the config file.
    pub loop_ms: Option<u64>,
}
