// SPDX-License-Identifier: MPL-2.0
//! `swipeable_element` is a vertically swipeable, swipe-to-confirm element
//! for the Iced GUI framework.
//!
//! The element loops upward while idle to invite a swipe, follows the pointer
//! within its container while dragged, reports whether a release reached the
//! top or the bottom edge, and springs back. The caller drives the loading and
//! finished visuals. See [`swipeable`] for the component and [`app`] for the
//! demo application built on it.

#![doc(html_root_url = "https://docs.rs/swipeable_element/0.1.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod swipeable;
pub mod ui;

pub use app::config;

#[cfg(test)]
pub(crate) mod test_utils;
