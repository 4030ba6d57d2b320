// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that turns pointer input over its content into a
//! vertical swipe gesture.
//!
//! The wrapper claims every event belonging to the gesture it owns, so
//! neither its content nor its ancestors react to the drag. It also reports
//! its own bounds whenever they change and draws the content shifted by the
//! current offset without affecting layout.

use crate::swipeable::gesture::{GestureEvent, PointerId, Recognizer};
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{touch, window, Element, Event, Length, Point, Rectangle, Size, Vector};

/// Pointer input relevant to the gesture, normalized across mouse and touch.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PointerInput {
    Pressed(PointerId, Option<Point>),
    Moved(PointerId, Point),
    Lifted(PointerId, Option<Point>),
    Lost(PointerId),
    Cancelled,
}

/// Per-instance widget state kept in the widget tree.
#[derive(Debug, Default)]
struct State {
    recognizer: Recognizer,
    reported: Option<Rectangle>,
}

/// Wraps content and recognizes a single-pointer vertical swipe over it.
pub struct SwipeArea<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    offset: f32,
    on_gesture: Option<Box<dyn Fn(GestureEvent) -> Message + 'a>>,
    on_layout: Option<Box<dyn Fn(Rectangle) -> Message + 'a>>,
}

impl<'a, Message, Theme, Renderer> SwipeArea<'a, Message, Theme, Renderer> {
    /// Creates a new `SwipeArea` drawing `content` shifted down by `offset`.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>, offset: f32) -> Self {
        Self {
            content: content.into(),
            offset,
            on_gesture: None,
            on_layout: None,
        }
    }

    /// Sets the message produced for each recognized gesture event.
    #[must_use]
    pub fn on_gesture(mut self, f: impl Fn(GestureEvent) -> Message + 'a) -> Self {
        self.on_gesture = Some(Box::new(f));
        self
    }

    /// Sets the message produced when the area's bounds change.
    #[must_use]
    pub fn on_layout(mut self, f: impl Fn(Rectangle) -> Message + 'a) -> Self {
        self.on_layout = Some(Box::new(f));
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for SwipeArea<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        renderer.with_translation(Vector::new(0.0, self.offset), |renderer| {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                layout,
                cursor,
                viewport,
            );
        });
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let state = tree.state.downcast_mut::<State>();

        if state.reported != Some(bounds) {
            state.reported = Some(bounds);
            if let Some(on_layout) = &self.on_layout {
                shell.publish(on_layout(bounds));
            }
        }

        let hit_area = drawn_bounds(bounds, self.offset);
        let gesture = pointer_input(event, cursor).and_then(|input| match input {
            PointerInput::Pressed(pointer, position) => state
                .recognizer
                .press(pointer, position.filter(|p| hit_area.contains(*p))),
            PointerInput::Moved(pointer, position) => state.recognizer.motion(pointer, position),
            PointerInput::Lifted(pointer, position) => state.recognizer.lift(pointer, position),
            PointerInput::Lost(pointer) => state.recognizer.lose(pointer),
            PointerInput::Cancelled => state.recognizer.cancel(),
        });

        if let Some(gesture) = gesture {
            if let Some(on_gesture) = &self.on_gesture {
                shell.publish(on_gesture(gesture));
            }
            shell.capture_event();
            return;
        }

        if state.recognizer.is_active() && is_pointer_event(event) {
            // Pointer events from other fingers stay ours while a gesture runs.
            shell.capture_event();
            return;
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.recognizer.owns(PointerId::Mouse) {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(drawn_bounds(layout.bounds(), self.offset)) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation + Vector::new(0.0, self.offset),
        )
    }
}

impl<'a, Message, Theme, Renderer> From<SwipeArea<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(area: SwipeArea<'a, Message, Theme, Renderer>) -> Self {
        Self::new(area)
    }
}

fn pointer_input(event: &Event, cursor: mouse::Cursor) -> Option<PointerInput> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(PointerInput::Pressed(PointerId::Mouse, cursor.position()))
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(PointerInput::Moved(PointerId::Mouse, *position))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(PointerInput::Lifted(PointerId::Mouse, cursor.position()))
        }
        Event::Mouse(mouse::Event::CursorLeft) | Event::Window(window::Event::Unfocused) => {
            Some(PointerInput::Cancelled)
        }
        Event::Touch(touch::Event::FingerPressed { id, position }) => {
            Some(PointerInput::Pressed(PointerId::Finger(id.0), Some(*position)))
        }
        Event::Touch(touch::Event::FingerMoved { id, position }) => {
            Some(PointerInput::Moved(PointerId::Finger(id.0), *position))
        }
        Event::Touch(touch::Event::FingerLifted { id, position }) => {
            Some(PointerInput::Lifted(PointerId::Finger(id.0), Some(*position)))
        }
        Event::Touch(touch::Event::FingerLost { id, .. }) => {
            Some(PointerInput::Lost(PointerId::Finger(id.0)))
        }
        _ => None,
    }
}

/// Where the content currently appears; presses are tested against this.
fn drawn_bounds(bounds: Rectangle, offset: f32) -> Rectangle {
    bounds + Vector::new(0.0, offset)
}

fn is_pointer_event(event: &Event) -> bool {
    matches!(event, Event::Mouse(_) | Event::Touch(_))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_press_maps_to_mouse_press_at_cursor() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let cursor = mouse::Cursor::Available(Point::new(4.0, 8.0));
        assert_eq!(
            pointer_input(&event, cursor),
            Some(PointerInput::Pressed(
                PointerId::Mouse,
                Some(Point::new(4.0, 8.0))
            ))
        );
    }

    #[test]
    fn hit_area_follows_drawn_offset() {
        let layout_bounds = Rectangle::new(Point::new(20.0, 40.0), Size::new(40.0, 40.0));
        let raised = drawn_bounds(layout_bounds, -34.0);

        assert_eq!(raised.y, 6.0);
        assert!(raised.contains(Point::new(40.0, 10.0)));
        assert!(!raised.contains(Point::new(40.0, 78.0)));
        assert_eq!(drawn_bounds(layout_bounds, 0.0), layout_bounds);
    }

    #[test]
    fn right_press_is_not_a_gesture() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right));
        assert_eq!(pointer_input(&event, mouse::Cursor::Unavailable), None);
    }

    #[test]
    fn finger_lost_maps_to_lost_pointer() {
        let event = Event::Touch(touch::Event::FingerLost {
            id: touch::Finger(3),
            position: Point::ORIGIN,
        });
        assert_eq!(
            pointer_input(&event, mouse::Cursor::Unavailable),
            Some(PointerInput::Lost(PointerId::Finger(3)))
        );
    }

    #[test]
    fn losing_focus_cancels() {
        let event = Event::Window(window::Event::Unfocused);
        assert_eq!(
            pointer_input(&event, mouse::Cursor::Unavailable),
            Some(PointerInput::Cancelled)
        );
        assert!(!is_pointer_event(&event));
    }

    #[test]
    fn wheel_is_a_pointer_event_but_not_gesture_input() {
        let event = Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
        });
        assert_eq!(pointer_input(&event, mouse::Cursor::Unavailable), None);
        assert!(is_pointer_event(&event));
    }
}
