// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared constants for colors, opacity, spacing, sizes and radii.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use swipeable_element::ui::design_tokens::{palette, sizing, spacing};

let pill = sizing::PILL; // 80px square
let gap = spacing::XS; // 8px
assert!(palette::CHARCOAL.r < palette::POWDER_BLUE.r);
assert!(pill > gap);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    /// `#333`, the swipe pill surface.
    pub const CHARCOAL: Color = Color::from_rgb(0.2, 0.2, 0.2);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// CSS `powderblue` (`#b0e0e6`).
    pub const POWDER_BLUE: Color = Color::from_rgb(0.690, 0.878, 0.902);
    /// Darker counterpart of the backdrop for dark mode.
    pub const SLATE_BLUE: Color = Color::from_rgb(0.165, 0.243, 0.286);

    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const HINT: f32 = 0.6;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    /// Gap between the swipe element and the bottom of the pill.
    pub const WRAPPER_GAP: f32 = 6.0;
    pub const XS: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Side of the square swipe container.
    pub const PILL: f32 = 80.0;
    /// Height of the swipe and finished icons.
    pub const ICON: f32 = 40.0;
    /// Diameter of the loading indicator.
    pub const SPINNER: f32 = 20.0;

    pub const WINDOW_WIDTH: f32 = 360.0;
    pub const WINDOW_HEIGHT: f32 = 480.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::WRAPPER_GAP);
    assert!(spacing::WRAPPER_GAP > spacing::XXS);
    assert!(spacing::MD > spacing::XS);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::HINT > 0.0 && opacity::HINT < 1.0);

    // The icon and its gap must fit inside the pill, otherwise there is no travel.
    assert!(sizing::ICON + spacing::WRAPPER_GAP < sizing::PILL);
    assert!(sizing::SPINNER < sizing::PILL);
    assert!(sizing::WINDOW_WIDTH > sizing::PILL);
    assert!(sizing::WINDOW_HEIGHT > sizing::PILL);

    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
    }

    #[test]
    fn pill_leaves_upward_travel_for_icon() {
        let travel = sizing::PILL - sizing::ICON - spacing::WRAPPER_GAP;
        assert!(travel > sizing::ICON / 2.0);
    }
}
