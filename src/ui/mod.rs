// SPDX-License-Identifier: MPL-2.0
//! User interface building blocks.
//!
//! - [`widgets`] - Custom Iced widgets (swipe area, layout reporting, spinner)
//! - [`styles`] - Centralized styling (containers, svg tints)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded SVG icons

pub mod design_tokens;
pub mod icons;
pub mod styles;
pub mod theming;
pub mod widgets;
