//! Per-agent motion snapshot passed to behaviors.

use glam::Vec2;

/// A copy of one agent's motion state at the start of a phase.
///
/// Built by the motion manager before polling behaviors so every behavior in
/// the same phase sees identical inputs, regardless of evaluation order.
/// `velocity` and `direction` are owned by the manager; this is a read-only
/// view.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kinematics {
    /// Current velocity in units per second.
    pub velocity: Vec2,

    /// Normalized facing direction.  Retains its last value while the agent
    /// is stationary; starts pointing along +X.
    pub direction: Vec2,

    /// Maximum speed in units per second (≥ 0).
    pub max_speed: f32,

    /// Mass in kilograms (≥ 1).
    pub mass: f32,
}

impl Default for Kinematics {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            direction: Vec2::X,
            max_speed: 5.0,
            mass: 1.0,
        }
    }
}
