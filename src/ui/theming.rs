// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors of the demo surfaces for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub backdrop: Color,
    pub text: Color,
    pub hint: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            backdrop: palette::POWDER_BLUE,
            text: palette::GRAY_900,
            hint: Color {
                a: opacity::HINT,
                ..palette::GRAY_900
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            backdrop: palette::SLATE_BLUE,
            text: palette::GRAY_100,
            hint: Color {
                a: opacity::HINT,
                ..palette::GRAY_100
            },
        }
    }

    /// Picks the scheme matching an iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Light backdrop unless the system explicitly says dark.
                matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
            }
        }
    }

    #[must_use]
    pub fn to_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_uses_powder_blue_backdrop() {
        assert_eq!(ColorScheme::light().backdrop, palette::POWDER_BLUE);
    }

    #[test]
    fn dark_scheme_has_dark_backdrop() {
        let scheme = ColorScheme::dark();
        assert!(scheme.backdrop.r < 0.3);
        assert!(scheme.text.r > 0.8);
    }

    #[test]
    fn scheme_follows_iced_theme() {
        assert_eq!(ColorScheme::for_theme(&Theme::Light), ColorScheme::light());
        assert_eq!(ColorScheme::for_theme(&Theme::Dark), ColorScheme::dark());
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        assert_eq!(ThemeMode::Dark.to_theme(), Theme::Dark);
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }
}
