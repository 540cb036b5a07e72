//! Simulation-level configuration.

/// Global simulation parameters.
///
/// Out-of-range values are clamped when the [`Sim`][crate::Sim] is built:
/// `time_scale` floors at 0 (paused) and `fixed_timestep` at a small positive
/// epsilon.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Multiplier applied to real frame time.  1.0 = real time, 0.0 = paused.
    pub time_scale: f32,

    /// Duration of one `FixedUpdate` sub-step in scaled seconds.
    pub fixed_timestep: f32,

    /// Call [`SimObserver::on_snapshot`][crate::SimObserver::on_snapshot]
    /// every this many frames.  0 disables snapshots.
    pub snapshot_interval_frames: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            fixed_timestep: 0.02,
            snapshot_interval_frames: 0,
        }
    }
}
