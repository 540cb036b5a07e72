//! Steering along a flow field.

use steer_core::{AgentRng, FieldId, Vec2};

use crate::basic::impl_params_accessors;
use crate::{BehaviorParams, SteerContext, SteeringBehavior};

/// Follow the flow field's direction at the agent's current position.
///
/// Samples the referenced field at the agent's position and heads along the
/// sampled vector at maximum speed.  Outside the field's bounds, over a zero
/// cell, or with an unknown `FieldId`, the behavior contributes nothing —
/// the same degenerate-input policy as a missing target.
///
/// The target handle is ignored; the field is the authority.
pub struct FieldFollow {
    pub params: BehaviorParams,
    /// Which of the simulation's registered fields to sample.
    pub field: FieldId,
}

impl FieldFollow {
    pub fn new(field: FieldId) -> Self {
        Self { params: BehaviorParams::default(), field }
    }
}

impl SteeringBehavior for FieldFollow {
    impl_params_accessors!();

    fn compute(&mut self, _target_pos: Vec2, ctx: &SteerContext<'_>, _rng: &mut AgentRng) -> Vec2 {
        let Some(field) = ctx.fields.get(self.field.index()) else {
            return Vec2::ZERO;
        };
        let sample = field.get_at(ctx.position);
        if sample == Vec2::ZERO {
            return Vec2::ZERO;
        }
        sample.normalize() * ctx.kin.max_speed
    }
}
