//! Simulation observer trait for progress reporting and trace collection.

use steer_agent::AgentStore;
use steer_motion::MotionManager;

/// Callbacks invoked by [`Sim::advance`][crate::Sim::advance] at frame
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_frame_end(&mut self, frame: u64, _sim_time_secs: f32, steered: usize) {
///         if frame % self.interval == 0 {
///             println!("frame {frame}: steered {steered} agents");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each frame, before any phase runs.
    fn on_frame_start(&mut self, _frame: u64) {}

    /// Called after the frame's last phase.
    ///
    /// `sim_time_secs` is the total scaled time elapsed including this frame;
    /// `steered` is the number of agents whose motion manager integrated at
    /// least once this frame.
    fn on_frame_end(&mut self, _frame: u64, _sim_time_secs: f32, _steered: usize) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_frames`
    /// frames).
    ///
    /// Provides read-only access to the agent transforms and the motion
    /// managers (for velocities) so trace writers can record the simulation
    /// state without the sim knowing about any specific output format.
    fn on_snapshot(
        &mut self,
        _frame: u64,
        _sim_time_secs: f32,
        _agents: &AgentStore,
        _managers: &[Option<MotionManager>],
    ) {
    }

    /// Called once by [`Sim::run_frames`][crate::Sim::run_frames] after the
    /// final frame completes.
    fn on_sim_end(&mut self, _final_frame: u64) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `advance`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
