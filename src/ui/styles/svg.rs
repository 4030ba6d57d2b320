// SPDX-License-Identifier: MPL-2.0
//! SVG tint styles.

use crate::ui::design_tokens::palette;
use iced::widget::svg;
use iced::Theme;

/// Tints monochrome icons white, for use on the dark pill.
pub fn on_pill(_theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(palette::WHITE),
    }
}
