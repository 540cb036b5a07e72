//! Read-only state passed to every behavior evaluation.

use steer_agent::AgentStore;
use steer_core::{AgentId, Kinematics, StepTiming, Vec2};
use steer_space::{FlowField, RayCaster};

use crate::BehaviorParams;

/// A read-only snapshot of the state one behavior evaluation may consult.
///
/// Built by the motion manager at the start of its phase and shared
/// (immutably) across all behaviors it polls, so every behavior in the same
/// phase sees identical inputs regardless of attachment order.
///
/// # Lifetimes
///
/// All borrows live for the duration of one phase of one frame.  The manager
/// never mutates the store while a context is live.
pub struct SteerContext<'a> {
    /// The agent being steered.
    pub agent: AgentId,

    /// The agent's current world position.
    pub position: Vec2,

    /// Snapshot of the agent's motion state (velocity, direction, limits).
    pub kin: Kinematics,

    /// Timing for the phase currently running.
    pub timing: StepTiming,

    /// Read-only view of every agent's transform, for target lookups.
    pub agents: &'a AgentStore,

    /// The raycast provider (used by the avoid behavior).
    pub caster: &'a dyn RayCaster,

    /// Flow fields registered with the simulation, indexed by `FieldId`.
    pub fields: &'a [FlowField],
}

impl SteerContext<'_> {
    /// Resolve a behavior's target handle to a world position.
    ///
    /// An unset target, or a handle that no longer resolves, yields the
    /// origin — a valid, if degenerate, target position.
    #[inline]
    pub fn target_position(&self, params: &BehaviorParams) -> Vec2 {
        params
            .target
            .and_then(|t| self.agents.position(t))
            .unwrap_or(Vec2::ZERO)
    }
}
