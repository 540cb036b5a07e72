//! The `SteeringBehavior` trait — the engine's main extension point.

use steer_core::{AgentRng, Vec2};

use crate::{BehaviorParams, SteerContext};

/// A pluggable steering behavior.
///
/// Each behavior proposes a desired velocity for its agent every phase; the
/// owning motion manager blends the proposals of all active behaviors and
/// integrates the result.  Behaviors never write agent state.
///
/// # Required methods
///
/// Only [`compute`](Self::compute) and the two `params` accessors are
/// required.  [`desired_velocity`](Self::desired_velocity) has a default
/// body that resolves the target handle and applies the blend weight.
///
/// # Weight discipline
///
/// `compute` must NOT apply the weight — the default `desired_velocity` does
/// that.  A behavior that overrides `desired_velocity` itself (the pursuit
/// family does, to predict the target first) must apply the weight in its
/// override.
pub trait SteeringBehavior: Send + 'static {
    /// Shared configuration: active flag, weight, target handle.
    fn params(&self) -> &BehaviorParams;

    fn params_mut(&mut self) -> &mut BehaviorParams;

    /// The behavior's core formula: the unweighted velocity this behavior
    /// wants, evaluated against `target_pos`.
    ///
    /// Takes `&mut self` because some behaviors (wander, pursuit) advance
    /// internal state on every evaluation.
    fn compute(
        &mut self,
        target_pos: Vec2,
        ctx: &SteerContext<'_>,
        rng: &mut AgentRng,
    ) -> Vec2;

    /// The weighted desired velocity polled by the motion manager.
    ///
    /// The default resolves the target handle (unset/stale targets become
    /// the origin) and returns `compute(target) * weight`.
    fn desired_velocity(&mut self, ctx: &SteerContext<'_>, rng: &mut AgentRng) -> Vec2 {
        let target_pos = ctx.target_position(self.params());
        let weight = self.params().weight();
        self.compute(target_pos, ctx, rng) * weight
    }

    /// Hook fired by the owning manager when the behavior's active flag
    /// actually changes value.  Default: no-op.  The pursuit family resets
    /// its velocity tracker here.
    fn on_active_changed(&mut self, _active: bool) {}
}
