// SPDX-License-Identifier: MPL-2.0
//! Swipe newtypes.
//!
//! Type-safe wrappers guaranteeing swipe configuration values stay within
//! usable ranges.

use std::time::Duration;

// =============================================================================
// Loop Bounds
// =============================================================================

/// Idle-loop duration bounds in milliseconds (100ms to 60s).
pub mod loop_bounds {
    /// Shortest loop iteration that still reads as an animation.
    pub const MIN_MS: u64 = 100;
    /// Longest loop iteration.
    pub const MAX_MS: u64 = 60_000;
    /// Default loop iteration length.
    pub const DEFAULT_MS: u64 = 2_000;
}

// =============================================================================
// LoopDuration
// =============================================================================

/// Length of one idle-loop iteration, guaranteed to be within 100ms–60s.
///
/// A zero-length loop would divide by zero when computing progress, so the
/// lower bound is enforced here rather than at every usage site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoopDuration(u64);

impl LoopDuration {
    /// Creates a new loop duration, clamping the value to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(loop_bounds::MIN_MS, loop_bounds::MAX_MS))
    }

    /// Returns the raw value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns whether the duration is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= loop_bounds::MIN_MS
    }

    /// Returns whether the duration is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= loop_bounds::MAX_MS
    }
}

impl Default for LoopDuration {
    fn default() -> Self {
        Self(loop_bounds::DEFAULT_MS)
    }
}

impl From<Duration> for LoopDuration {
    fn from(duration: Duration) -> Self {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        Self::new(millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_duration_clamps() {
        assert_eq!(LoopDuration::new(0).millis(), loop_bounds::MIN_MS);
        assert_eq!(LoopDuration::new(u64::MAX).millis(), loop_bounds::MAX_MS);
    }

    #[test]
    fn loop_duration_default() {
        assert_eq!(LoopDuration::default().millis(), 2_000);
    }

    #[test]
    fn loop_duration_as_duration() {
        let duration = LoopDuration::new(1_500);
        assert_eq!(duration.as_duration(), Duration::from_millis(1_500));
    }

    #[test]
    fn loop_duration_min_max() {
        assert!(LoopDuration::new(loop_bounds::MIN_MS).is_min());
        assert!(LoopDuration::new(loop_bounds::MAX_MS).is_max());
        assert!(!LoopDuration::default().is_min());
    }

    #[test]
    fn loop_duration_from_std_duration() {
        assert_eq!(
            LoopDuration::from(Duration::from_secs(3)),
            LoopDuration::new(3_000)
        );
        assert!(LoopDuration::from(Duration::from_secs(u64::MAX)).is_max());
    }
}
