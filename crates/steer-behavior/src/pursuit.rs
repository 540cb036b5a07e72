//! Prediction-based pursuit and evasion.
//!
//! # Velocity estimation
//!
//! The target's velocity is estimated by sampling its position on a fixed
//! 1-second cadence while the behavior is active: each sample sets
//! `estimate = current − last` (displacement over the fixed interval, so
//! v = Δs / 1).  The cadence is an explicit accumulator advanced inside the
//! per-frame evaluation — no background task:
//!
//! - On (re)activation the tracker is unseeded; the first evaluation after
//!   that re-seeds `last` from the target's current position, so a sample
//!   never spans a gap in which the behavior was off.
//! - Deactivation zeroes the estimate synchronously, before any later read.
//!
//! # Prediction
//!
//! `future_steps = round(distance / max_speed)` clamped to
//! `[0, max_future_steps]`: proportional lookahead predicts far ahead while
//! the target is distant (where error matters less) and collapses to plain
//! seek as the agent closes in (where a stale prediction would overshoot).
//! The hard ceiling bounds runaway prediction against a fast target.

use steer_core::{AgentId, AgentRng, Vec2};

use crate::basic::impl_params_accessors;
use crate::steering;
use crate::{BehaviorParams, SteerContext, SteeringBehavior};

/// Default ceiling on the prediction horizon, in steps.
pub const DEFAULT_MAX_FUTURE_STEPS: u32 = 5;

// ── TargetTracker ─────────────────────────────────────────────────────────────

/// Fixed-cadence target velocity estimator shared by `Pursuit` and `Evade`.
#[derive(Copy, Clone, Debug, Default)]
pub struct TargetTracker {
    estimate: Vec2,
    last_pos: Vec2,
    accumulated: f32,
    seeded: bool,
}

impl TargetTracker {
    /// Seconds between velocity samples.
    pub const SAMPLE_INTERVAL: f32 = 1.0;

    /// The current velocity estimate in units per second.
    #[inline]
    pub fn estimate(&self) -> Vec2 {
        self.estimate
    }

    /// Advance the sampling accumulator by one evaluation.
    ///
    /// The first call after a reset only seeds `last_pos`; subsequent calls
    /// accumulate elapsed time and take a displacement sample whenever a
    /// whole interval has passed.
    fn advance(&mut self, target_pos: Vec2, dt: f32) {
        if !self.seeded {
            self.last_pos = target_pos;
            self.accumulated = 0.0;
            self.seeded = true;
            return;
        }
        self.accumulated += dt;
        if self.accumulated >= Self::SAMPLE_INTERVAL {
            self.estimate = target_pos - self.last_pos;
            self.last_pos = target_pos;
            self.accumulated = 0.0;
        }
    }

    /// Zero the estimate and drop the seed.  Called on every activation
    /// change: deactivation must never leave a stale estimate readable, and
    /// reactivation must re-seed from the target's position at that time.
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Prediction horizon in whole steps: `round(distance / max_speed)` clamped
/// to `[0, max_steps]`.
///
/// Degenerate speeds are saturated rather than propagated: a zero max speed
/// makes the ratio infinite (clamps to `max_steps`), and the 0/0 case at
/// zero distance collapses to 0 steps.
fn future_steps(position: Vec2, target_pos: Vec2, max_speed: f32, max_steps: u32) -> u32 {
    let ratio = position.distance(target_pos) / max_speed;
    if ratio.is_nan() {
        return 0;
    }
    // `as` saturates on overflow and infinity.
    (ratio.round() as u32).min(max_steps)
}

/// Where the target will be after `steps` whole seconds at the estimated
/// velocity.
#[inline]
fn predicted_target(target_pos: Vec2, tracker: &TargetTracker, steps: u32) -> Vec2 {
    target_pos + tracker.estimate() * steps as f32
}

// ── Pursuit ───────────────────────────────────────────────────────────────────

/// Seek toward the target's predicted future position.
pub struct Pursuit {
    pub params: BehaviorParams,
    max_future_steps: u32,
    tracker: TargetTracker,
}

impl Pursuit {
    pub fn new(target: Option<AgentId>) -> Self {
        Self {
            params: BehaviorParams::new(target),
            max_future_steps: DEFAULT_MAX_FUTURE_STEPS,
            tracker: TargetTracker::default(),
        }
    }

    #[inline]
    pub fn max_future_steps(&self) -> u32 {
        self.max_future_steps
    }

    /// Horizon clamps below to 0.
    pub fn set_max_future_steps(&mut self, steps: i32) {
        self.max_future_steps = steps.max(0) as u32;
    }

    /// The current target velocity estimate.
    #[inline]
    pub fn target_velocity(&self) -> Vec2 {
        self.tracker.estimate()
    }
}

impl SteeringBehavior for Pursuit {
    impl_params_accessors!();

    fn compute(&mut self, target_pos: Vec2, ctx: &SteerContext<'_>, _rng: &mut AgentRng) -> Vec2 {
        steering::seek(ctx.position, target_pos, ctx.kin.max_speed)
    }

    // Overrides the default to predict first; must apply the weight itself.
    fn desired_velocity(&mut self, ctx: &SteerContext<'_>, rng: &mut AgentRng) -> Vec2 {
        let target_pos = ctx.target_position(&self.params);
        self.tracker.advance(target_pos, ctx.timing.delta);

        let steps = future_steps(ctx.position, target_pos, ctx.kin.max_speed, self.max_future_steps);
        let predicted = predicted_target(target_pos, &self.tracker, steps);

        self.compute(predicted, ctx, rng) * self.params.weight()
    }

    fn on_active_changed(&mut self, _active: bool) {
        self.tracker.reset();
    }
}

// ── Evade ─────────────────────────────────────────────────────────────────────

/// Flee from the target's predicted future position — [`Pursuit`] with the
/// resulting vector negated, the same relationship `Flee` has to `Seek`.
pub struct Evade {
    pub params: BehaviorParams,
    max_future_steps: u32,
    tracker: TargetTracker,
}

impl Evade {
    pub fn new(target: Option<AgentId>) -> Self {
        Self {
            params: BehaviorParams::new(target),
            max_future_steps: DEFAULT_MAX_FUTURE_STEPS,
            tracker: TargetTracker::default(),
        }
    }

    #[inline]
    pub fn max_future_steps(&self) -> u32 {
        self.max_future_steps
    }

    /// Horizon clamps below to 0.
    pub fn set_max_future_steps(&mut self, steps: i32) {
        self.max_future_steps = steps.max(0) as u32;
    }

    /// The current target velocity estimate.
    #[inline]
    pub fn target_velocity(&self) -> Vec2 {
        self.tracker.estimate()
    }
}

impl SteeringBehavior for Evade {
    impl_params_accessors!();

    fn compute(&mut self, target_pos: Vec2, ctx: &SteerContext<'_>, _rng: &mut AgentRng) -> Vec2 {
        steering::flee(ctx.position, target_pos, ctx.kin.max_speed)
    }

    // Same override as Pursuit, with the fled-from prediction.
    fn desired_velocity(&mut self, ctx: &SteerContext<'_>, rng: &mut AgentRng) -> Vec2 {
        let target_pos = ctx.target_position(&self.params);
        self.tracker.advance(target_pos, ctx.timing.delta);

        let steps = future_steps(ctx.position, target_pos, ctx.kin.max_speed, self.max_future_steps);
        let predicted = predicted_target(target_pos, &self.tracker, steps);

        self.compute(predicted, ctx, rng) * self.params.weight()
    }

    fn on_active_changed(&mut self, _active: bool) {
        self.tracker.reset();
    }
}
