//! Randomized wandering via an integrated angle on a carrot circle.

use steer_core::vec2::rotate_deg;
use steer_core::{AgentRng, Vec2};

use crate::basic::impl_params_accessors;
use crate::steering;
use crate::{BehaviorParams, SteerContext, SteeringBehavior};

/// Stateful randomized seek toward a "carrot" on a circle ahead of the agent.
///
/// Each evaluation draws a random angle delta uniformly from
/// `[-360°, 360°)` per second, scales it by the elapsed phase time, and adds
/// it to a persistent wander angle.  The carrot sits on the circle of
/// `circle_radius` centered `circle_distance` ahead along the agent's facing
/// direction, at that accumulated angle.  Because the angle is integrated
/// rather than resampled fresh, consecutive frames steer toward nearby
/// carrots and the path bends smoothly instead of jittering.
///
/// The target handle is ignored; the carrot is the target.
pub struct Wander {
    pub params: BehaviorParams,
    circle_distance: f32,
    circle_radius: f32,
    wander_angle: f32,
}

impl Default for Wander {
    fn default() -> Self {
        Self::new(1.0, 0.5)
    }
}

impl Wander {
    pub fn new(circle_distance: f32, circle_radius: f32) -> Self {
        Self {
            params: BehaviorParams::default(),
            circle_distance: circle_distance.max(1.0),
            circle_radius: circle_radius.max(0.0),
            wander_angle: 0.0,
        }
    }

    #[inline]
    pub fn circle_distance(&self) -> f32 {
        self.circle_distance
    }

    /// Distance clamps below to 1.
    pub fn set_circle_distance(&mut self, distance: f32) {
        self.circle_distance = distance.max(1.0);
    }

    #[inline]
    pub fn circle_radius(&self) -> f32 {
        self.circle_radius
    }

    /// Radius clamps below to 0.
    pub fn set_circle_radius(&mut self, radius: f32) {
        self.circle_radius = radius.max(0.0);
    }

    /// The accumulated wander angle in degrees.
    #[inline]
    pub fn wander_angle(&self) -> f32 {
        self.wander_angle
    }
}

impl SteeringBehavior for Wander {
    impl_params_accessors!();

    fn compute(&mut self, _target_pos: Vec2, ctx: &SteerContext<'_>, rng: &mut AgentRng) -> Vec2 {
        let center = ctx.position + ctx.kin.direction * self.circle_distance;

        let delta: f32 = rng.gen_range(-360.0..360.0);
        self.wander_angle += delta * ctx.timing.delta;

        let displacement = rotate_deg(Vec2::new(self.circle_radius, 0.0), self.wander_angle);
        let carrot = center + displacement;

        steering::seek(ctx.position, carrot, ctx.kin.max_speed)
    }
}
