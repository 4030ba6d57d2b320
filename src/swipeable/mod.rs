// SPDX-License-Identifier: MPL-2.0
//! Vertically swipeable element.
//!
//! The component wraps a caller-supplied element inside a fixed container.
//! While idle the element loops upward and fades out to invite a swipe. A
//! drag moves it within the container, and releasing it reports whether it
//! reached the top or the bottom edge before it springs back. The caller owns
//! the loading and finished flags; the component only renders them.
//!
//! It follows the usual Elm layout: [`State`] is kept by the caller,
//! [`State::handle`] consumes [`Message`]s and returns an [`Effect`], and
//! [`State::view`] / [`State::subscription`] are called with the caller's
//! [`Props`].
//!
//! ```ignore
//! // in the parent's update
//! Message::Swipe(msg) => match self.swipe.handle(msg) {
//!     swipeable::Effect::SwipeCompleted(outcome) if outcome.is_top_reached => {
//!         self.is_loading = true;
//!         Task::perform(submit(), Message::Submitted)
//!     }
//!     _ => Task::none(),
//! }
//! ```

pub mod animation;
pub mod bounds;
pub mod branch;
pub mod driver;
pub mod gesture;

pub use bounds::{Bounds, SwipeOutcome};
pub use branch::{Branch, Props};
pub use driver::{Driver, Frame, Phase};
pub use gesture::{GestureEvent, PointerId, Recognizer};

use crate::domain::swipe::LoopDuration;
use crate::ui::design_tokens::sizing;
use crate::ui::styles;
use crate::ui::widgets::animated_spinner::advance_rotation;
use crate::ui::widgets::{AnimatedSpinner, Measured, SwipeArea};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, Container};
use iced::{window, Color, Element, Length, Padding, Rectangle, Subscription, Theme};
use std::time::{Duration, Instant};

/// Messages handled by [`State::handle`].
#[derive(Debug, Clone)]
pub enum Message {
    /// The outer container was laid out at the given absolute bounds.
    ContainerLaidOut(Rectangle),
    /// The swipeable wrapper was laid out at the given absolute bounds.
    WrapperLaidOut(Rectangle),
    Gesture(GestureEvent),
    /// Animation frame delivered by the window.
    Frame(Instant),
}

/// What the caller should react to after handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The user released the element. Emitted once per release, never when
    /// the gesture was terminated.
    SwipeCompleted(SwipeOutcome),
}

/// Styling of the outer container.
#[derive(Debug, Clone, Copy)]
pub struct ContainerStyle {
    pub width: Length,
    pub height: Length,
    pub padding: Padding,
    pub align_x: Horizontal,
    pub style: fn(&Theme) -> container::Style,
}

impl Default for ContainerStyle {
    fn default() -> Self {
        Self {
            width: Length::Shrink,
            height: Length::Shrink,
            padding: Padding::ZERO,
            align_x: Horizontal::Left,
            style: styles::container::plain,
        }
    }
}

/// Placement of the swipeable wrapper inside the container.
#[derive(Debug, Clone, Copy)]
pub struct WrapperStyle {
    /// Space kept around the wrapper; it counts as travel room.
    pub margin: Padding,
    pub align_y: Vertical,
}

impl Default for WrapperStyle {
    fn default() -> Self {
        Self {
            margin: Padding::ZERO,
            align_y: Vertical::Top,
        }
    }
}

/// Caller styling for the two boxes the component lays out.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleProp {
    pub container: ContainerStyle,
    pub swipeable_wrapper: WrapperStyle,
}

/// Everything [`State::view`] needs from the caller for one render.
pub struct ViewContext<'a, 'f> {
    pub props: Props,
    /// Spinner color for the loading branch.
    pub loader_color: Color,
    /// Builds the view shown once the caller reports completion.
    pub finished: &'f dyn Fn() -> Element<'a, Message>,
    /// Builds the swipeable element for the given opacity.
    pub element: &'f dyn Fn(f32) -> Element<'a, Message>,
    pub style: &'f StyleProp,
}

impl<'a, 'f> ViewContext<'a, 'f> {
    /// Creates a context with a white loader and default styling.
    pub fn new(
        props: Props,
        finished: &'f dyn Fn() -> Element<'a, Message>,
        element: &'f dyn Fn(f32) -> Element<'a, Message>,
        style: &'f StyleProp,
    ) -> Self {
        Self {
            props,
            loader_color: Color::WHITE,
            finished,
            element,
            style,
        }
    }

    #[must_use]
    pub fn loader_color(mut self, color: Color) -> Self {
        self.loader_color = color;
        self
    }
}

/// Component state owned by the caller.
#[derive(Debug, Clone)]
pub struct State {
    container: Option<Rectangle>,
    wrapper: Option<Rectangle>,
    driver: Driver,
    spinner_rotation: f32,
    last_frame: Option<Instant>,
}

impl State {
    #[must_use]
    pub fn new(loop_duration: LoopDuration) -> Self {
        Self {
            container: None,
            wrapper: None,
            driver: Driver::new(loop_duration),
            spinner_rotation: 0.0,
            last_frame: None,
        }
    }

    /// Travel limits for the current geometry; zero until both boxes are known.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::from_layout(self.container, self.wrapper)
    }

    #[must_use]
    pub fn frame(&self) -> Frame {
        self.driver.frame()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.driver.phase()
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::ContainerLaidOut(rect) => {
                if self.container != Some(rect) {
                    self.container = Some(rect);
                    self.geometry_changed();
                }
            }
            Message::WrapperLaidOut(rect) => {
                if self.wrapper != Some(rect) {
                    self.wrapper = Some(rect);
                    self.geometry_changed();
                }
            }
            Message::Gesture(event) => return self.handle_gesture(event),
            Message::Frame(now) => {
                if let Some(last) = self.last_frame {
                    let elapsed = now
                        .saturating_duration_since(last)
                        .min(Duration::from_secs_f32(animation::MAX_FRAME_DELTA));
                    self.spinner_rotation = advance_rotation(self.spinner_rotation, elapsed);
                }
                self.last_frame = Some(now);
                self.driver.tick(now);
            }
        }

        Effect::None
    }

    fn handle_gesture(&mut self, event: GestureEvent) -> Effect {
        match event {
            GestureEvent::Grant => self.driver.grant(),
            GestureEvent::Move { dy } => self.driver.drag_to(self.bounds().clamp(dy)),
            GestureEvent::Release { dy } => {
                let bounds = self.bounds();
                let outcome = bounds.classify(bounds.clamp(dy));
                tracing::info!(
                    dy,
                    is_top_reached = outcome.is_top_reached,
                    is_bottom_reached = outcome.is_bottom_reached,
                    "swipe completed"
                );
                self.driver.settle();
                return Effect::SwipeCompleted(outcome);
            }
            GestureEvent::Terminate => {
                tracing::debug!("swipe terminated");
                self.driver.settle();
            }
        }

        Effect::None
    }

    fn geometry_changed(&mut self) {
        if self.container.is_some() && self.wrapper.is_some() {
            let bounds = self.bounds();
            if bounds.is_degenerate() {
                tracing::debug!(?bounds, "swipeable wrapper has no room to move");
            }
            self.driver.layout_changed(bounds);
        }
    }

    /// Applies the caller's flags after they change.
    ///
    /// Hiding the element mid-drag removes the widget that would have
    /// reported the release, so the drag ends here as a termination.
    pub fn sync_props(&mut self, props: Props) {
        if self.driver.phase() == Phase::Dragging && !Branch::from(props).is_interactive() {
            tracing::debug!(?props, "element hidden during a drag, terminating");
            self.driver.settle();
        }
    }

    /// Returns whether window frames are needed for the given flags.
    #[must_use]
    pub fn needs_frames(&self, props: Props) -> bool {
        match Branch::from(props) {
            Branch::Loading => true,
            Branch::Finished => false,
            Branch::Interactive => self.driver.is_animating(),
        }
    }

    pub fn subscription(&self, props: Props) -> Subscription<Message> {
        if self.needs_frames(props) {
            window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        }
    }

    pub fn view<'a>(&self, context: ViewContext<'a, '_>) -> Element<'a, Message> {
        let style = context.style;

        let content: Element<'a, Message> = match Branch::from(context.props) {
            Branch::Loading => Container::new(
                AnimatedSpinner::new(context.loader_color, self.spinner_rotation)
                    .size(sizing::SPINNER)
                    .into_element(),
            )
            .center_y(Length::Fill)
            .into(),
            Branch::Finished => (context.finished)(),
            Branch::Interactive => {
                let frame = self.driver.frame();
                let area = SwipeArea::new((context.element)(frame.opacity), frame.offset)
                    .on_gesture(Message::Gesture)
                    .on_layout(Message::WrapperLaidOut);

                Container::new(area)
                    .padding(style.swipeable_wrapper.margin)
                    .height(Length::Fill)
                    .align_y(style.swipeable_wrapper.align_y)
                    .into()
            }
        };

        let outer = Container::new(content)
            .width(style.container.width)
            .height(style.container.height)
            .padding(style.container.padding)
            .align_x(style.container.align_x)
            .style(style.container.style);

        Measured::new(outer, Message::ContainerLaidOut).into()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(LoopDuration::default())
    }
}
