// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod measured;
pub mod swipe_area;

pub use animated_spinner::AnimatedSpinner;
pub use measured::Measured;
pub use swipe_area::SwipeArea;
