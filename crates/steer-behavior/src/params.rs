//! Configuration shared by every steering behavior.

use steer_core::AgentId;

/// The per-behavior configuration surface: activation, blend weight, and an
/// optional target handle.
///
/// The target is an [`AgentId`] into the agent store rather than a direct
/// reference, so a despawned target can never dangle; resolution happens at
/// evaluation time and an unresolvable handle degrades to the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BehaviorParams {
    active: bool,
    weight: f32,
    /// Target agent, or `None` to evaluate against the origin.
    pub target: Option<AgentId>,
    /// Hint for host-side debug drawing; the engine itself never reads it.
    pub debug: bool,
}

impl Default for BehaviorParams {
    fn default() -> Self {
        Self { active: true, weight: 1.0, target: None, debug: false }
    }
}

impl BehaviorParams {
    pub fn new(target: Option<AgentId>) -> Self {
        Self { target, ..Self::default() }
    }

    #[inline]
    pub fn active(&self) -> bool {
        self.active
    }

    /// Set the active flag directly.
    ///
    /// When the behavior is attached to a motion manager, prefer
    /// `MotionManager::set_behavior_active`, which also fires the behavior's
    /// activation hook and rebuilds the manager's active list.  After direct
    /// edits here, call `refresh_behaviors` on the owning manager.
    #[inline]
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    #[inline]
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Set the blend weight, clamped into `[0, 1]`.
    #[inline]
    pub fn set_weight(&mut self, weight: f32) {
        self.weight = weight.clamp(0.0, 1.0);
    }
}
