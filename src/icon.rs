// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Uses the project SVG and rasterizes it at runtime to produce a RGBA icon
//! for the window title bar. Falls back to `None` if rendering fails.

use crate::error::{Error, Result};
use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/swipeable_element.svg");
const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG icon to a 128x128 RGBA buffer.
/// Returns `None` if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    let rgba = match rasterize(SVG_SOURCE, ICON_SIZE) {
        Ok(rgba) => rgba,
        Err(err) => {
            tracing::warn!(%err, "window icon unavailable");
            return None;
        }
    };

    icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).ok()
}

/// Renders `svg` into a square RGBA buffer of `size` pixels per side.
pub fn rasterize(svg: &str, size: u32) -> Result<Vec<u8>> {
    let tree = usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default())?;

    let orig_size = tree.size();
    #[allow(clippy::cast_precision_loss)]
    let target = size as f32;
    let transform =
        tiny_skia::Transform::from_scale(target / orig_size.width(), target / orig_size.height());

    let mut pixmap = tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| Error::Svg(format!("cannot allocate a {size}x{size} pixmap")))?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap.take())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_icon_rasterizes_to_rgba() {
        let rgba = rasterize(SVG_SOURCE, 32).expect("embedded svg renders");
        assert_eq!(rgba.len(), 32 * 32 * 4);
        // The backdrop fills the corners' neighborhood, so some pixels are opaque.
        assert!(rgba.chunks_exact(4).any(|px| px[3] == 255));
    }

    #[test]
    fn invalid_svg_is_an_svg_error() {
        let err = rasterize("<not svg", 16).unwrap_err();
        assert!(matches!(err, Error::Svg(_)));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(rasterize(SVG_SOURCE, 0), Err(Error::Svg(_))));
    }
}
