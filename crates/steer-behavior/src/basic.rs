//! The base locomotion behaviors and their distance-scaled derivatives.
//!
//! | Behavior  | Base | Scaling                                              |
//! |-----------|------|------------------------------------------------------|
//! | `Seek`    | seek | none                                                 |
//! | `Flee`    | flee | none                                                 |
//! | `Arrival` | seek | decelerates inside `slowing_radius` (d / r)          |
//! | `Eschew`  | flee | weakens with distance: max(0, 1 − d / `safe_radius`) |
//! | `Magnet`  | seek | pull-in grows near target: 1 − d / `attraction_radius`, zero outside |

use steer_core::{AgentId, AgentRng, Vec2};

use crate::steering;
use crate::{BehaviorParams, SteerContext, SteeringBehavior};

/// Expand the `params`/`params_mut` accessor pair every behavior needs.
macro_rules! impl_params_accessors {
    () => {
        fn params(&self) -> &BehaviorParams {
            &self.params
        }

        fn params_mut(&mut self) -> &mut BehaviorParams {
            &mut self.params
        }
    };
}
pub(crate) use impl_params_accessors;

// ── Seek ──────────────────────────────────────────────────────────────────────

/// Head straight for the target at maximum speed.
#[derive(Default)]
pub struct Seek {
    pub params: BehaviorParams,
}

impl Seek {
    pub fn new(target: Option<AgentId>) -> Self {
        Self { params: BehaviorParams::new(target) }
    }
}

impl SteeringBehavior for Seek {
    impl_params_accessors!();

    fn compute(&mut self, target_pos: Vec2, ctx: &SteerContext<'_>, _rng: &mut AgentRng) -> Vec2 {
        steering::seek(ctx.position, target_pos, ctx.kin.max_speed)
    }
}

// ── Flee ──────────────────────────────────────────────────────────────────────

/// Head straight away from the target at maximum speed.  Bit-for-bit the
/// negation of [`Seek`] for the same inputs.
#[derive(Default)]
pub struct Flee {
    pub params: BehaviorParams,
}

impl Flee {
    pub fn new(target: Option<AgentId>) -> Self {
        Self { params: BehaviorParams::new(target) }
    }
}

impl SteeringBehavior for Flee {
    impl_params_accessors!();

    fn compute(&mut self, target_pos: Vec2, ctx: &SteerContext<'_>, _rng: &mut AgentRng) -> Vec2 {
        steering::flee(ctx.position, target_pos, ctx.kin.max_speed)
    }
}

// ── Arrival ───────────────────────────────────────────────────────────────────

/// Seek with deceleration: at full speed outside `slowing_radius`, then
/// slowing linearly with the remaining distance so the agent stops on the
/// target instead of overshooting and oscillating.
pub struct Arrival {
    pub params: BehaviorParams,
    slowing_radius: f32,
}

impl Arrival {
    pub fn new(target: Option<AgentId>, slowing_radius: f32) -> Self {
        Self {
            params: BehaviorParams::new(target),
            slowing_radius: slowing_radius.max(1.0),
        }
    }

    #[inline]
    pub fn slowing_radius(&self) -> f32 {
        self.slowing_radius
    }

    /// Radius clamps below to 1.
    pub fn set_slowing_radius(&mut self, radius: f32) {
        self.slowing_radius = radius.max(1.0);
    }
}

impl SteeringBehavior for Arrival {
    impl_params_accessors!();

    fn compute(&mut self, target_pos: Vec2, ctx: &SteerContext<'_>, _rng: &mut AgentRng) -> Vec2 {
        let distance = ctx.position.distance(target_pos);
        let deceleration = if distance > self.slowing_radius {
            1.0
        } else {
            distance / self.slowing_radius
        };
        steering::seek(ctx.position, target_pos, ctx.kin.max_speed) * deceleration
    }
}

// ── Eschew ────────────────────────────────────────────────────────────────────

/// Flee with inverse deceleration: the push away weakens linearly with
/// distance and vanishes outside `safe_radius`, so the agent keeps a minimal
/// distance rather than fleeing endlessly.
pub struct Eschew {
    pub params: BehaviorParams,
    safe_radius: f32,
}

impl Eschew {
    pub fn new(target: Option<AgentId>, safe_radius: f32) -> Self {
        Self {
            params: BehaviorParams::new(target),
            safe_radius: safe_radius.max(1.0),
        }
    }

    #[inline]
    pub fn safe_radius(&self) -> f32 {
        self.safe_radius
    }

    /// Radius clamps below to 1.
    pub fn set_safe_radius(&mut self, radius: f32) {
        self.safe_radius = radius.max(1.0);
    }
}

impl SteeringBehavior for Eschew {
    impl_params_accessors!();

    fn compute(&mut self, target_pos: Vec2, ctx: &SteerContext<'_>, _rng: &mut AgentRng) -> Vec2 {
        let distance = ctx.position.distance(target_pos);
        let deceleration = (1.0 - distance / self.safe_radius).max(0.0);
        steering::flee(ctx.position, target_pos, ctx.kin.max_speed) * deceleration
    }
}

// ── Magnet ────────────────────────────────────────────────────────────────────

/// Seek with proximity-based acceleration — Arrival's timing inverted.  No
/// pull at all outside `attraction_radius`; inside, the pull strengthens as
/// the agent closes in, reaching full seek speed on the target itself.
pub struct Magnet {
    pub params: BehaviorParams,
    attraction_radius: f32,
}

impl Magnet {
    pub fn new(target: Option<AgentId>, attraction_radius: f32) -> Self {
        Self {
            params: BehaviorParams::new(target),
            attraction_radius: attraction_radius.max(1.0),
        }
    }

    #[inline]
    pub fn attraction_radius(&self) -> f32 {
        self.attraction_radius
    }

    /// Radius clamps below to 1.
    pub fn set_attraction_radius(&mut self, radius: f32) {
        self.attraction_radius = radius.max(1.0);
    }
}

impl SteeringBehavior for Magnet {
    impl_params_accessors!();

    fn compute(&mut self, target_pos: Vec2, ctx: &SteerContext<'_>, _rng: &mut AgentRng) -> Vec2 {
        let distance = ctx.position.distance(target_pos);
        let attraction = if distance > self.attraction_radius {
            0.0
        } else {
            1.0 - distance / self.attraction_radius
        };
        steering::seek(ctx.position, target_pos, ctx.kin.max_speed) * attraction
    }
}
