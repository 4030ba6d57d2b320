// SPDX-License-Identifier: MPL-2.0
//! Animation primitives: easing curves, a damped spring and loop progress.
//!
//! Everything here is driven by frame instants handed in by the caller, so
//! the same code runs under iced's frame subscription and in tests with a
//! synthetic clock.

use crate::domain::swipe::LoopDuration;
use std::time::{Duration, Instant};

/// Fixed integration step for the spring (~60fps).
const SPRING_TIMESTEP: f32 = 1.0 / 60.0;

/// Upper bound on the time integrated in one frame, so a stalled event loop
/// does not make the spring spin through hundreds of sub-steps.
pub const MAX_FRAME_DELTA: f32 = 0.25;

// =============================================================================
// Easing
// =============================================================================

/// Easing curves applied to timing animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps a linear fraction in `[0, 1]` onto the curve.
    #[must_use]
    pub fn transform(self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
        }
    }
}

/// Evaluates a unit cubic bezier at horizontal position `fraction`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;
    let derivative = |a: f32, b: f32, c: f32, t: f32| (3.0 * a * t + 2.0 * b) * t + c;

    // Newton-Raphson for the parametric t matching x, bisection if it stalls.
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = sample(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            converged = true;
            break;
        }
        let dx = derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        t = fraction;
        for _ in 0..16 {
            let delta = sample(ax, bx, cx, t) - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
    }

    sample(ay, by, cy, t)
}

/// Linear interpolation between `from` and `to`.
#[must_use]
pub fn lerp(from: f32, to: f32, fraction: f32) -> f32 {
    from + (to - from) * fraction
}

// =============================================================================
// Loop
// =============================================================================

/// Fraction of the current loop iteration, in `[0, 1)`.
///
/// Every iteration restarts from zero, so values jump back to their starting
/// point at each boundary instead of reversing.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
// Both operands are below 60s in nanoseconds, well within f64 precision.
pub fn loop_progress(elapsed: Duration, duration: LoopDuration) -> f32 {
    let period = duration.as_duration().as_nanos();
    let within = elapsed.as_nanos() % period;

    (within as f64 / period as f64) as f32
}

// =============================================================================
// Spring
// =============================================================================

/// Spring configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Stiffness constant (unit mass). Higher values settle faster.
    pub stiffness: f32,
    /// 1.0 = critically damped, below 1.0 overshoots.
    pub damping_ratio: f32,
    /// Displacement under which the spring may come to rest, in pixels.
    pub rest_displacement: f32,
    /// Speed under which the spring may come to rest, in pixels per second.
    pub rest_velocity: f32,
}

impl Default for SpringSpec {
    /// Tension 40 / friction 7 expressed as stiffness 230 and damping 22.
    fn default() -> Self {
        Self {
            stiffness: 230.0,
            damping_ratio: 0.725,
            rest_displacement: 0.01,
            rest_velocity: 0.01,
        }
    }
}

/// Damped harmonic oscillator moving a scalar toward a target.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    spec: SpringSpec,
    position: f32,
    velocity: f32,
    target: f32,
    last_frame: Option<Instant>,
}

impl Spring {
    /// Creates a spring at rest at `from`, heading to `target`.
    #[must_use]
    pub fn new(from: f32, target: f32, spec: SpringSpec) -> Self {
        Self {
            spec,
            position: from,
            velocity: 0.0,
            target,
            last_frame: None,
        }
    }

    /// Current value.
    #[must_use]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Returns whether the spring has settled on its target.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        (self.position - self.target).abs() < self.spec.rest_displacement
            && self.velocity.abs() < self.spec.rest_velocity
    }

    /// Advances the simulation to `now` and returns whether it is at rest.
    ///
    /// The first call only anchors the clock.
    pub fn step(&mut self, now: Instant) -> bool {
        let Some(last) = self.last_frame.replace(now) else {
            return self.settle_if_at_rest();
        };

        let elapsed = now
            .saturating_duration_since(last)
            .as_secs_f32()
            .min(MAX_FRAME_DELTA);

        let stiffness = self.spec.stiffness;
        let damping = 2.0 * self.spec.damping_ratio * stiffness.sqrt();

        // Semi-implicit Euler: velocity first, then position.
        let mut integrated = 0.0;
        while integrated < elapsed {
            let h = SPRING_TIMESTEP.min(elapsed - integrated);
            let displacement = self.position - self.target;
            let force = -stiffness * displacement - damping * self.velocity;
            self.velocity += force * h;
            self.position += self.velocity * h;
            integrated += h;
        }

        self.settle_if_at_rest()
    }

    fn settle_if_at_rest(&mut self) -> bool {
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
            true
        } else {
            false
        }
    }
}
