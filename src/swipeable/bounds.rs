// SPDX-License-Identifier: MPL-2.0
//! Travel bounds of the swipeable wrapper inside its container.
//!
//! Bounds are derived from the two measured rectangles and are the only place
//! where physical limits are enforced: gesture deltas are clamped here before
//! they reach the animation driver, and the final delta of a release is
//! classified here.

use iced::Rectangle;

/// Maximum upward and downward displacement of the wrapper, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Distance from the wrapper's top edge to the container's top edge.
    pub max_up: f32,
    /// Distance from the wrapper's bottom edge to the container's bottom edge.
    pub max_down: f32,
}

impl Bounds {
    /// No travel at all. Used until both rectangles have been measured.
    pub const ZERO: Self = Self {
        max_up: 0.0,
        max_down: 0.0,
    };

    /// Computes the bounds from the container and wrapper rectangles.
    ///
    /// Both rectangles are expected in the same coordinate space; the wrapper
    /// is made relative to the container origin. If either one is unknown the
    /// result is [`Bounds::ZERO`], which disables movement until layout is
    /// available.
    #[must_use]
    pub fn from_layout(container: Option<Rectangle>, wrapper: Option<Rectangle>) -> Self {
        let (Some(container), Some(wrapper)) = (container, wrapper) else {
            return Self::ZERO;
        };

        let wrapper_y = wrapper.y - container.y;

        Self {
            max_up: wrapper_y,
            max_down: container.height - (wrapper_y + wrapper.height),
        }
    }

    /// Clamps a vertical delta into `[-max_up, max_down]`.
    ///
    /// The downward cap is applied before the upward floor so an inverted
    /// range (wrapper overflowing its container) resolves to `-max_up`
    /// instead of panicking like [`f32::clamp`] would.
    #[must_use]
    pub fn clamp(self, dy: f32) -> f32 {
        dy.min(self.max_down).max(-self.max_up)
    }

    /// Classifies the final delta of a gesture.
    #[must_use]
    pub fn classify(self, dy: f32) -> SwipeOutcome {
        SwipeOutcome {
            is_top_reached: dy <= -self.max_up,
            is_bottom_reached: dy >= self.max_down,
        }
    }

    /// Returns whether the wrapper has no room to move in either direction.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.max_up <= 0.0 && self.max_down <= 0.0
    }
}

/// Result of a completed swipe, reported once per release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwipeOutcome {
    /// The wrapper touched the top edge of the container when released.
    pub is_top_reached: bool,
    /// The wrapper touched the bottom edge of the container when released.
    pub is_bottom_reached: bool,
}
