// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG icons.
//!
//! Icons are monochrome SVGs embedded at compile time via `include_bytes!`;
//! handles are cached in a `OnceLock` so every view reuses the same one.
//! Tint them with a style from [`styles::svg`](super::styles::svg).

use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

/// Defines an icon function returning an `Svg` built from a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(up_arrow, "up-arrow.svg", "Arrow pointing up.");
define_icon!(check_mark, "check-mark.svg", "Check mark.");
