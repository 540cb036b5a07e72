//! Raycast-based obstacle avoidance.

use steer_core::{AgentRng, Vec2};
use steer_space::LayerMask;

use crate::basic::impl_params_accessors;
use crate::{BehaviorParams, SteerContext, SteeringBehavior};

/// Looks ahead along the agent's current movement direction and steers away
/// from the nearest blocking obstacle.
///
/// The cast runs out to `see_ahead_distance`, as a thin ray when
/// `cast_radius` is zero or as a circular sweep of that radius otherwise,
/// filtered by `mask`.  On a hit, the push-away vector (from the obstacle's
/// center through the contact point) is summed 1:1 with the agent's current
/// velocity and renormalized, so avoidance bends the path instead of
/// reversing it abruptly.  With no hit this behavior contributes nothing.
///
/// The target handle is ignored; obstacles come from the ray caster.
pub struct Avoid {
    pub params: BehaviorParams,
    see_ahead_distance: f32,
    cast_radius: f32,
    /// Obstacle layers this behavior reacts to.
    pub mask: LayerMask,
}

impl Default for Avoid {
    fn default() -> Self {
        Self::new(2.0, 0.0)
    }
}

impl Avoid {
    pub fn new(see_ahead_distance: f32, cast_radius: f32) -> Self {
        Self {
            params: BehaviorParams::default(),
            see_ahead_distance: see_ahead_distance.max(1.0),
            cast_radius: cast_radius.max(0.0),
            mask: LayerMask::ALL,
        }
    }

    #[inline]
    pub fn see_ahead_distance(&self) -> f32 {
        self.see_ahead_distance
    }

    /// Distance clamps below to 1.
    pub fn set_see_ahead_distance(&mut self, distance: f32) {
        self.see_ahead_distance = distance.max(1.0);
    }

    #[inline]
    pub fn cast_radius(&self) -> f32 {
        self.cast_radius
    }

    /// Radius clamps below to 0; zero selects a thin ray.
    pub fn set_cast_radius(&mut self, radius: f32) {
        self.cast_radius = radius.max(0.0);
    }
}

impl SteeringBehavior for Avoid {
    impl_params_accessors!();

    fn compute(&mut self, _target_pos: Vec2, ctx: &SteerContext<'_>, _rng: &mut AgentRng) -> Vec2 {
        let hit = ctx.caster.cast(
            ctx.position,
            ctx.kin.direction,
            self.see_ahead_distance,
            self.cast_radius,
            self.mask,
        );

        match hit {
            Some(hit) => {
                let steer = (hit.point - hit.center).normalize_or_zero() * ctx.kin.max_speed;
                (steer + ctx.kin.velocity).normalize_or_zero() * ctx.kin.max_speed
            }
            None => Vec2::ZERO,
        }
    }
}
