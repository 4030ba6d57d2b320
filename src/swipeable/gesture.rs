// SPDX-License-Identifier: MPL-2.0
//! Single-pointer vertical gesture recognition.
//!
//! The recognizer turns raw pointer input into an explicit event stream
//! (grant, move, release, terminate). It knows nothing about bounds: deltas
//! are reported raw and clamped by the component.

use iced::Point;

/// Identifies the pointer driving a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    Mouse,
    Finger(u64),
}

/// Events emitted by the recognizer, in the order they can occur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// A pointer went down over the region; the gesture now owns it.
    Grant,
    /// The active pointer moved. `dy` is cumulative since the grant.
    Move { dy: f32 },
    /// The active pointer was lifted. `dy` is the final cumulative delta.
    Release { dy: f32 },
    /// The gesture was taken away (touch cancelled, cursor or focus lost).
    Terminate,
}

/// Gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Active {
    pointer: PointerId,
    origin_y: f32,
    last_dy: f32,
}

/// Tracks at most one active pointer.
#[derive(Debug, Clone, Default)]
pub struct Recognizer {
    active: Option<Active>,
}

impl Recognizer {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a gesture is currently in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Returns whether `pointer` is the one driving the current gesture.
    #[must_use]
    pub fn owns(&self, pointer: PointerId) -> bool {
        self.active.is_some_and(|active| active.pointer == pointer)
    }

    /// A pointer went down. `position` is `None` when it is outside the region.
    ///
    /// Only the first pointer is granted; others are ignored until it lifts.
    pub fn press(&mut self, pointer: PointerId, position: Option<Point>) -> Option<GestureEvent> {
        if self.active.is_some() {
            return None;
        }

        let position = position?;
        self.active = Some(Active {
            pointer,
            origin_y: position.y,
            last_dy: 0.0,
        });

        Some(GestureEvent::Grant)
    }

    /// A pointer moved to `position`.
    pub fn motion(&mut self, pointer: PointerId, position: Point) -> Option<GestureEvent> {
        let active = self.active.as_mut().filter(|a| a.pointer == pointer)?;
        let dy = position.y - active.origin_y;
        active.last_dy = dy;

        Some(GestureEvent::Move { dy })
    }

    /// A pointer was lifted. Without a position the last known delta is used.
    pub fn lift(&mut self, pointer: PointerId, position: Option<Point>) -> Option<GestureEvent> {
        if !self.owns(pointer) {
            return None;
        }

        let active = self.active.take()?;
        let dy = position.map_or(active.last_dy, |p| p.y - active.origin_y);

        Some(GestureEvent::Release { dy })
    }

    /// The pointer was lost without a regular lift.
    pub fn lose(&mut self, pointer: PointerId) -> Option<GestureEvent> {
        if !self.owns(pointer) {
            return None;
        }

        self.active = None;
        Some(GestureEvent::Terminate)
    }

    /// Cancels whatever gesture is in progress (window unfocused, cursor left).
    pub fn cancel(&mut self) -> Option<GestureEvent> {
        self.active.take().map(|_| GestureEvent::Terminate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOUSE: PointerId = PointerId::Mouse;

    #[test]
    fn press_outside_region_is_ignored() {
        let mut recognizer = Recognizer::new();
        assert_eq!(recognizer.press(MOUSE, None), None);
        assert!(!recognizer.is_active());
    }

    #[test]
    fn press_inside_region_grants() {
        let mut recognizer = Recognizer::new();
        let event = recognizer.press(MOUSE, Some(Point::new(10.0, 50.0)));

        assert_eq!(event, Some(GestureEvent::Grant));
        assert!(recognizer.owns(MOUSE));
    }

    #[test]
    fn motion_reports_cumulative_delta() {
        let mut recognizer = Recognizer::new();
        recognizer.press(MOUSE, Some(Point::new(10.0, 50.0)));

        assert_eq!(
            recognizer.motion(MOUSE, Point::new(12.0, 40.0)),
            Some(GestureEvent::Move { dy: -10.0 })
        );
        assert_eq!(
            recognizer.motion(MOUSE, Point::new(90.0, 15.0)),
            Some(GestureEvent::Move { dy: -35.0 })
        );
    }

    #[test]
    fn motion_without_gesture_is_ignored() {
        let mut recognizer = Recognizer::new();
        assert_eq!(recognizer.motion(MOUSE, Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn lift_reports_final_delta_and_ends_gesture() {
        let mut recognizer = Recognizer::new();
        recognizer.press(MOUSE, Some(Point::new(0.0, 50.0)));
        recognizer.motion(MOUSE, Point::new(0.0, 30.0));

        let event = recognizer.lift(MOUSE, Some(Point::new(0.0, 20.0)));

        assert_eq!(event, Some(GestureEvent::Release { dy: -30.0 }));
        assert!(!recognizer.is_active());
    }

    #[test]
    fn lift_without_position_uses_last_delta() {
        let mut recognizer = Recognizer::new();
        recognizer.press(MOUSE, Some(Point::new(0.0, 50.0)));
        recognizer.motion(MOUSE, Point::new(0.0, 62.0));

        assert_eq!(
            recognizer.lift(MOUSE, None),
            Some(GestureEvent::Release { dy: 12.0 })
        );
    }

    #[test]
    fn second_pointer_is_ignored_while_active() {
        let mut recognizer = Recognizer::new();
        let finger = PointerId::Finger(7);
        recognizer.press(finger, Some(Point::new(0.0, 50.0)));

        assert_eq!(recognizer.press(MOUSE, Some(Point::new(0.0, 10.0))), None);
        assert_eq!(recognizer.motion(MOUSE, Point::new(0.0, 0.0)), None);
        assert_eq!(recognizer.lift(MOUSE, None), None);
        assert!(recognizer.owns(finger));
    }

    #[test]
    fn lose_terminates_owned_gesture_only() {
        let mut recognizer = Recognizer::new();
        let finger = PointerId::Finger(1);
        recognizer.press(finger, Some(Point::new(0.0, 50.0)));

        assert_eq!(recognizer.lose(PointerId::Finger(2)), None);
        assert_eq!(recognizer.lose(finger), Some(GestureEvent::Terminate));
        assert!(!recognizer.is_active());
    }

    #[test]
    fn cancel_terminates_any_gesture() {
        let mut recognizer = Recognizer::new();
        assert_eq!(recognizer.cancel(), None);

        recognizer.press(MOUSE, Some(Point::new(0.0, 50.0)));
        assert_eq!(recognizer.cancel(), Some(GestureEvent::Terminate));
        assert_eq!(recognizer.cancel(), None);
    }
}
