//! Motion manager configuration.

use steer_core::UpdatePhase;

/// Construction-time configuration for a [`MotionManager`][crate::MotionManager].
///
/// Out-of-range values are clamped at construction, never rejected:
///
/// | Field       | Floor |
/// |-------------|-------|
/// | `max_speed` | 0     |
/// | `mass`      | 1     |
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionConfig {
    /// The single update phase this manager integrates in.
    pub phase: UpdatePhase,

    /// Speed ceiling handed to behaviors through the kinematics snapshot.
    pub max_speed: f32,

    /// Inertia divisor for the steering force.
    pub mass: f32,

    /// Write `atan2(v.y, v.x)` into the agent's stored rotation whenever the
    /// velocity is nonzero.
    pub rotate: bool,

    /// Integrate with the unscaled (wall-clock) delta instead of the scaled
    /// one, so this agent ignores slow-motion and pause.
    pub timescale_independent: bool,

    /// Hint for host-side debug drawing; the engine itself never reads it.
    pub debug: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            phase: UpdatePhase::Update,
            max_speed: 5.0,
            mass: 1.0,
            rotate: true,
            timescale_independent: false,
            debug: false,
        }
    }
}
