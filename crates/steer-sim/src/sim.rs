//! The `Sim` struct and its frame loop.

use log::{debug, info};
use steer_agent::{AgentRngs, AgentStore};
use steer_core::{AgentId, FrameClock};
use steer_motion::MotionManager;
use steer_space::{FlowField, ObstacleSet};

use crate::{SimConfig, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim` holds all engine state and drives the per-frame phase loop:
///
/// 1. [`FrameClock::begin_frame`] converts the frame's real duration into an
///    ordered phase list — zero or more `FixedUpdate` sub-steps, then one
///    `Update`, then one `LateUpdate`.
/// 2. Each phase steps every steered agent's [`MotionManager`] in ascending
///    `AgentId` order (a manager ignores phases other than its own).
/// 3. Observer hooks fire at the frame boundaries, plus a full-state snapshot
///    every `config.snapshot_interval_frames` frames.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration.
    pub config: SimConfig,

    /// Frame clock — drains fixed sub-steps and tracks elapsed time.
    pub clock: FrameClock,

    /// Agent transforms (SoA arrays).  Managers write integrated positions
    /// here; behaviors read target positions from it.
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// One optional motion manager per agent, dense by `AgentId`.  Agents
    /// without a manager (pure targets, scenery) are never stepped.
    pub managers: Vec<Option<MotionManager>>,

    /// Circular obstacles; the `RayCaster` handed to avoidance behaviors.
    pub obstacles: ObstacleSet,

    /// Registered flow fields, indexed by `FieldId` in registration order.
    pub fields: Vec<FlowField>,
}

impl Sim {
    /// Advance the simulation by one frame spanning `real_dt` wall-clock
    /// seconds.
    ///
    /// Returns the number of agents whose manager integrated at least once
    /// this frame.
    pub fn advance<O: SimObserver>(&mut self, real_dt: f32, observer: &mut O) -> SimResult<usize> {
        let frame = self.clock.frame();
        observer.on_frame_start(frame);

        let timings = self.clock.begin_frame(real_dt);
        let mut stepped = vec![false; self.managers.len()];

        for timing in timings {
            for (index, slot) in self.managers.iter_mut().enumerate() {
                let Some(manager) = slot.as_mut() else { continue };
                let agent = AgentId(index as u32);
                let did_step = manager.step(
                    agent,
                    timing,
                    &mut self.agents,
                    &self.obstacles,
                    &self.fields,
                    self.rngs.get_mut(agent),
                )?;
                if did_step {
                    stepped[index] = true;
                }
            }
        }

        let steered = stepped.iter().filter(|s| **s).count();
        observer.on_frame_end(frame, self.clock.elapsed_secs(), steered);

        let interval = self.config.snapshot_interval_frames;
        if interval > 0 && frame % interval == 0 {
            debug!("snapshot at frame {frame} ({:.3} s)", self.clock.elapsed_secs());
            observer.on_snapshot(frame, self.clock.elapsed_secs(), &self.agents, &self.managers);
        }

        Ok(steered)
    }

    /// Advance exactly `n` frames of `real_dt` seconds each, then fire
    /// [`SimObserver::on_sim_end`].
    pub fn run_frames<O: SimObserver>(
        &mut self,
        n: u64,
        real_dt: f32,
        observer: &mut O,
    ) -> SimResult<()> {
        info!("running {n} frames at {real_dt} s/frame");
        for _ in 0..n {
            self.advance(real_dt, observer)?;
        }
        observer.on_sim_end(self.clock.frame());
        info!("finished at frame {} ({:.3} s)", self.clock.frame(), self.clock.elapsed_secs());
        Ok(())
    }
}
