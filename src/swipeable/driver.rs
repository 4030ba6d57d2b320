// SPDX-License-Identifier: MPL-2.0
//! Animation driver for the swipeable wrapper.
//!
//! Owns the two animated scalars (vertical offset and opacity) and sequences
//! the idle loop, direct drag mirroring and the spring back to rest.
//! Transitions are edge-triggered by gesture calls; time only advances
//! through [`Driver::tick`], and animations anchor their clock on the first
//! frame they see.

use super::animation::{lerp, loop_progress, Easing, Spring, SpringSpec};
use super::bounds::Bounds;
use crate::domain::swipe::LoopDuration;
use std::time::Instant;

/// Rest values of the two scalars.
const REST_OFFSET: f32 = 0.0;
const OPAQUE: f32 = 1.0;
const FADED: f32 = 0.0;

/// Phase of the driver state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Geometry is not known yet; nothing animates.
    AwaitingLayout,
    /// Attention loop: the wrapper rises toward the top while fading out.
    IdleLoop,
    /// The user holds the wrapper; the offset mirrors the clamped delta.
    Dragging,
    /// The wrapper springs back to rest before the loop resumes.
    Settling,
}

/// Values to render for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub offset: f32,
    pub opacity: f32,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            offset: REST_OFFSET,
            opacity: OPAQUE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Motion {
    Still,
    Looping { started_at: Option<Instant> },
    Spring(Spring),
}

/// Drives offset and opacity through the idle loop, drag and settle phases.
#[derive(Debug, Clone)]
pub struct Driver {
    phase: Phase,
    motion: Motion,
    frame: Frame,
    has_layout: bool,
    loop_travel: f32,
    loop_duration: LoopDuration,
    easing: Easing,
    spring: SpringSpec,
}

impl Driver {
    /// Creates a driver waiting for layout.
    #[must_use]
    pub fn new(loop_duration: LoopDuration) -> Self {
        Self {
            phase: Phase::AwaitingLayout,
            motion: Motion::Still,
            frame: Frame::default(),
            has_layout: false,
            loop_travel: 0.0,
            loop_duration,
            easing: Easing::default(),
            spring: SpringSpec::default(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Render descriptor for the current state.
    #[must_use]
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Returns whether frames must keep coming for the animation to progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !matches!(self.motion, Motion::Still)
    }

    /// Geometry became available or changed.
    ///
    /// The loop restarts so it travels the new distance. A gesture or settle
    /// in progress is left alone and picks the new travel up when the loop
    /// resumes.
    pub fn layout_changed(&mut self, bounds: Bounds) {
        self.has_layout = true;
        self.loop_travel = bounds.max_up;

        if matches!(self.phase, Phase::AwaitingLayout | Phase::IdleLoop) {
            self.start_loop();
        }
    }

    /// A gesture took the wrapper: the loop is halted and reset.
    pub fn grant(&mut self) {
        self.motion = Motion::Still;
        self.frame = Frame::default();
        self.enter(Phase::Dragging);
    }

    /// Mirrors an already clamped delta while dragging.
    pub fn drag_to(&mut self, clamped_dy: f32) {
        if self.phase == Phase::Dragging {
            self.frame.offset = clamped_dy;
        }
    }

    /// The gesture ended (released or terminated): spring back to rest.
    pub fn settle(&mut self) {
        self.frame.opacity = OPAQUE;
        self.motion = Motion::Spring(Spring::new(self.frame.offset, REST_OFFSET, self.spring));
        self.enter(Phase::Settling);
    }

    /// Advances running animations to `now`.
    pub fn tick(&mut self, now: Instant) {
        match &mut self.motion {
            Motion::Still => {}
            Motion::Looping { started_at } => {
                let started = *started_at.get_or_insert(now);
                let progress = loop_progress(now.saturating_duration_since(started), self.loop_duration);
                let eased = self.easing.transform(progress);

                self.frame = Frame {
                    offset: lerp(REST_OFFSET, -self.loop_travel, eased),
                    opacity: lerp(OPAQUE, FADED, eased),
                };
            }
            Motion::Spring(spring) => {
                let at_rest = spring.step(now);
                self.frame.offset = spring.position();

                if at_rest {
                    if self.has_layout {
                        self.start_loop();
                    } else {
                        self.motion = Motion::Still;
                        self.enter(Phase::AwaitingLayout);
                    }
                }
            }
        }
    }

    fn start_loop(&mut self) {
        self.frame = Frame::default();
        self.motion = Motion::Looping { started_at: None };
        self.enter(Phase::IdleLoop);
    }

    fn enter(&mut self, phase: Phase) {
        if self.phase != phase {
            tracing::debug!(from = ?self.phase, to = ?phase, "swipe phase change");
            self.phase = phase;
        }
    }
}
