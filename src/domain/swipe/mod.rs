// SPDX-License-Identifier: MPL-2.0
//! Swipe domain types.
//!
//! Value objects used by the swipeable component that are independent
//! of any presentation framework.

pub mod newtypes;

pub use newtypes::{loop_bounds, LoopDuration};
