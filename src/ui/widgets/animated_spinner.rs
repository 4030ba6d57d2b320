// SPDX-License-Identifier: MPL-2.0
//! Canvas activity indicator shown while the caller is loading.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Fraction of the circle covered by the moving arc.
const ARC_SWEEP: f32 = 0.75 * TAU;
const ARC_SEGMENTS: u16 = 32;
/// Track alpha relative to the arc color.
const TRACK_ALPHA: f32 = 0.2;

/// Spinner whose arc position is driven by the caller's rotation angle.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner of the default size at the given rotation (radians).
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::SPINNER,
        }
    }

    /// Sets the diameter in logical pixels.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size.max(1.0);
        self
    }

    /// Stroke width grows with the diameter so small spinners stay legible.
    fn stroke_width(&self) -> f32 {
        (self.size / 10.0).clamp(2.0, 6.0)
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let width = self.stroke_width();

        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = (frame.width().min(frame.height()) - width) / 2.0;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(width).with_color(Color {
                        a: self.color.a * TRACK_ALPHA,
                        ..self.color
                    }),
                );

                // Start at twelve o'clock.
                let start = self.rotation - PI / 2.0;
                let point_at = |angle: f32| {
                    Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    )
                };

                let mut builder = canvas::path::Builder::new();
                builder.move_to(point_at(start));
                for i in 1..=ARC_SEGMENTS {
                    let t = f32::from(i) / f32::from(ARC_SEGMENTS);
                    builder.line_to(point_at(start + ARC_SWEEP * t));
                }

                frame.stroke(
                    &builder.build(),
                    Stroke::default()
                        .with_width(width)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

/// Advances a rotation angle by `elapsed` at one turn per second, wrapped to
/// `[0, TAU)`.
#[must_use]
pub fn advance_rotation(rotation: f32, elapsed: std::time::Duration) -> f32 {
    (rotation + TAU * elapsed.as_secs_f32()).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use std::time::Duration;

    #[test]
    fn quarter_second_is_quarter_turn() {
        assert_abs_diff_eq!(
            advance_rotation(0.0, Duration::from_millis(250)),
            TAU / 4.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn rotation_wraps() {
        let r = advance_rotation(TAU - 0.1, Duration::from_millis(100));
        assert!((0.0..TAU).contains(&r));
        assert!(r < 1.0);
    }

    #[test]
    fn stroke_width_is_bounded() {
        let tiny = AnimatedSpinner::new(Color::WHITE, 0.0).size(4.0);
        let huge = AnimatedSpinner::new(Color::WHITE, 0.0).size(400.0);
        assert_abs_diff_eq!(tiny.stroke_width(), 2.0);
        assert_abs_diff_eq!(huge.stroke_width(), 6.0);
    }

    #[test]
    fn size_has_a_one_pixel_floor() {
        assert_abs_diff_eq!(AnimatedSpinner::new(Color::WHITE, 0.0).size(0.0).size, 1.0);
        assert_abs_diff_eq!(AnimatedSpinner::new(Color::WHITE, 0.0).size(-5.0).size, 1.0);
        assert_abs_diff_eq!(AnimatedSpinner::new(Color::WHITE, 0.0).size(32.0).size, 32.0);
    }
}
