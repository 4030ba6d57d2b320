// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// No background, no border.
pub fn plain(_theme: &Theme) -> container::Style {
    container::Style::default()
}

/// Dark rounded surface hosting the swipe element.
pub fn pill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::CHARCOAL)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Full-window backdrop behind the pill, following the active theme.
pub fn backdrop(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.backdrop)),
        text_color: Some(colors.text),
        ..Default::default()
    }
}
