// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with no dependency on the UI toolkit.
//!
//! # Modules
//!
//! - [`swipe`]: Swipe interaction values ([`LoopDuration`](swipe::LoopDuration))

pub mod swipe;
