// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Mirrors the classic confirm flow: a swipe that reaches the top starts a
//! (simulated) confirmation call while the spinner shows, then the finished
//! view is displayed for a while before the element comes back.

use super::Message;
use crate::error::{Error, Result};
use crate::swipeable::{self, Effect, Props, SwipeOutcome};
use iced::Task;
use std::time::Duration;

/// Timings of the simulated confirmation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoTimings {
    pub mock_latency: Duration,
    pub finished_display: Duration,
}

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub swipe: &'a mut swipeable::State,
    pub props: &'a mut Props,
    pub timings: DemoTimings,
}

/// Simulated confirmation call.
pub async fn mock_api_call(latency: Duration) -> Result<()> {
    tokio::time::sleep(latency).await;
    Ok(())
}

pub fn handle_swipe_message(ctx: &mut UpdateContext<'_>, message: swipeable::Message) -> Task<Message> {
    match ctx.swipe.handle(message) {
        Effect::None => Task::none(),
        Effect::SwipeCompleted(outcome) => handle_swipe_completed(ctx, outcome),
    }
}

fn handle_swipe_completed(ctx: &mut UpdateContext<'_>, outcome: SwipeOutcome) -> Task<Message> {
    if !outcome.is_top_reached || ctx.props.is_loading {
        return Task::none();
    }

    ctx.props.is_loading = true;
    Task::perform(
        mock_api_call(ctx.timings.mock_latency),
        Message::ConfirmationCompleted,
    )
}

/// Loading always ends here, whatever the outcome of the call.
pub fn handle_confirmation_completed(
    ctx: &mut UpdateContext<'_>,
    result: std::result::Result<(), Error>,
) -> Task<Message> {
    ctx.props.is_loading = false;

    match result {
        Ok(()) => {
            ctx.props.is_finished = true;
            let display = ctx.timings.finished_display;
            Task::perform(tokio::time::sleep(display), |()| Message::FinishedElapsed)
        }
        Err(err) => {
            tracing::warn!(%err, "confirmation call failed");
            Task::none()
        }
    }
}

pub fn handle_finished_elapsed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.props.is_finished = false;
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::swipe::LoopDuration;
    use crate::swipeable::GestureEvent;
    use iced::{Point, Rectangle, Size};

    const TIMINGS: DemoTimings = DemoTimings {
        mock_latency: Duration::from_millis(1),
        finished_display: Duration::from_millis(1),
    };

    fn laid_out_swipe() -> swipeable::State {
        let mut swipe = swipeable::State::new(LoopDuration::default());
        swipe.handle(swipeable::Message::ContainerLaidOut(Rectangle::new(
            Point::ORIGIN,
            Size::new(80.0, 80.0),
        )));
        swipe.handle(swipeable::Message::WrapperLaidOut(Rectangle::new(
            Point::new(20.0, 34.0),
            Size::new(40.0, 40.0),
        )));
        swipe
    }

    fn release(ctx: &mut UpdateContext<'_>, dy: f32) {
        let _ = handle_swipe_message(ctx, swipeable::Message::Gesture(GestureEvent::Grant));
        let _ = handle_swipe_message(ctx, swipeable::Message::Gesture(GestureEvent::Release { dy }));
    }

    #[test]
    fn top_swipe_starts_loading() {
        let mut swipe = laid_out_swipe();
        let mut props = Props::default();
        let mut ctx = UpdateContext {
            swipe: &mut swipe,
            props: &mut props,
            timings: TIMINGS,
        };

        release(&mut ctx, -34.0);

        assert!(props.is_loading);
        assert!(!props.is_finished);
    }

    #[test]
    fn bottom_or_partial_swipe_does_nothing() {
        for dy in [6.0, -10.0, 0.0] {
            let mut swipe = laid_out_swipe();
            let mut props = Props::default();
            let mut ctx = UpdateContext {
                swipe: &mut swipe,
                props: &mut props,
                timings: TIMINGS,
            };

            release(&mut ctx, dy);

            assert_eq!(props, Props::default(), "dy = {dy}");
        }
    }

    #[tokio::test]
    async fn successful_call_shows_finished_then_clears() {
        let mut swipe = laid_out_swipe();
        let mut props = Props {
            is_loading: true,
            is_finished: false,
        };
        let mut ctx = UpdateContext {
            swipe: &mut swipe,
            props: &mut props,
            timings: TIMINGS,
        };

        let _ = handle_confirmation_completed(&mut ctx, Ok(()));
        assert!(!ctx.props.is_loading);
        assert!(ctx.props.is_finished);

        let _ = handle_finished_elapsed(&mut ctx);
        assert_eq!(*ctx.props, Props::default());
    }

    #[test]
    fn failed_call_still_clears_loading() {
        let mut swipe = laid_out_swipe();
        let mut props = Props {
            is_loading: true,
            is_finished: false,
        };
        let mut ctx = UpdateContext {
            swipe: &mut swipe,
            props: &mut props,
            timings: TIMINGS,
        };

        let _ = handle_confirmation_completed(&mut ctx, Err(Error::Api("offline".into())));

        assert_eq!(props, Props::default());
    }

    #[tokio::test]
    async fn mock_api_call_resolves_after_latency() {
        let started = std::time::Instant::now();
        let result = mock_api_call(Duration::from_millis(20)).await;

        assert!(result.is_ok());
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
