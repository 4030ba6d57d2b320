// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Swipe**: Idle-loop length and loader color
//! - **Demo**: Timings of the simulated confirmation call

use crate::domain::swipe::loop_bounds;

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Default length of one idle-loop iteration, in milliseconds.
pub const DEFAULT_LOOP_ANIMATION_MS: u64 = loop_bounds::DEFAULT_MS;

/// Minimum loop length accepted from the config file.
pub const MIN_LOOP_ANIMATION_MS: u64 = loop_bounds::MIN_MS;

/// Maximum loop length accepted from the config file.
pub const MAX_LOOP_ANIMATION_MS: u64 = loop_bounds::MAX_MS;

/// Default spinner color.
pub const DEFAULT_LOADER_COLOR: &str = "white";

// ==========================================================================
// Demo Defaults
// ==========================================================================

/// Simulated latency of the confirmation call, in milliseconds.
pub const DEFAULT_MOCK_LATENCY_MS: u64 = 1_000;

/// Upper bound on the simulated latency.
pub const MAX_MOCK_LATENCY_MS: u64 = 30_000;

/// How long the finished view stays up before the element returns.
pub const DEFAULT_FINISHED_DISPLAY_MS: u64 = 2_000;

/// Upper bound on the finished display time.
pub const MAX_FINISHED_DISPLAY_MS: u64 = 30_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_LOOP_ANIMATION_MS > 0);
    assert!(DEFAULT_LOOP_ANIMATION_MS >= MIN_LOOP_ANIMATION_MS);
    assert!(DEFAULT_LOOP_ANIMATION_MS <= MAX_LOOP_ANIMATION_MS);

    assert!(DEFAULT_MOCK_LATENCY_MS <= MAX_MOCK_LATENCY_MS);
    assert!(DEFAULT_FINISHED_DISPLAY_MS <= MAX_FINISHED_DISPLAY_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_defaults_are_valid() {
        assert_eq!(DEFAULT_LOOP_ANIMATION_MS, 2_000);
        assert!(DEFAULT_LOOP_ANIMATION_MS >= MIN_LOOP_ANIMATION_MS);
        assert!(DEFAULT_LOOP_ANIMATION_MS <= MAX_LOOP_ANIMATION_MS);
    }

    #[test]
    fn demo_defaults_are_valid() {
        assert_eq!(DEFAULT_MOCK_LATENCY_MS, 1_000);
        assert_eq!(DEFAULT_FINISHED_DISPLAY_MS, 2_000);
    }
}
