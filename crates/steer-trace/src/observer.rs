//! `TraceObserver<W>` — bridges `SimObserver` to a `TraceWriter`.

use steer_agent::AgentStore;
use steer_motion::MotionManager;
use steer_sim::SimObserver;

use crate::row::{AgentSampleRow, FrameSummaryRow};
use crate::writer::TraceWriter;
use crate::TraceError;

/// A [`SimObserver`] that records frame summaries and per-agent samples
/// through any [`TraceWriter`] backend (CSV, SQLite).
///
/// A summary row is written every frame; sample rows follow the sim's
/// snapshot cadence (`SimConfig::snapshot_interval_frames`).  Errors from the
/// writer are stored internally because `SimObserver` methods have no return
/// value; after the run, check with [`take_error`](Self::take_error).
pub struct TraceObserver<W: TraceWriter> {
    writer: W,
    last_error: Option<TraceError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<TraceError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::TraceResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> SimObserver for TraceObserver<W> {
    fn on_frame_end(&mut self, frame: u64, sim_time_secs: f32, steered: usize) {
        let row = FrameSummaryRow {
            frame,
            sim_time_secs,
            steered_agents: steered as u64,
        };
        let result = self.writer.write_frame_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(
        &mut self,
        frame: u64,
        _sim_time_secs: f32,
        agents: &AgentStore,
        managers: &[Option<MotionManager>],
    ) {
        let rows: Vec<AgentSampleRow> = (0..agents.count)
            .map(|i| {
                let velocity = managers
                    .get(i)
                    .and_then(|m| m.as_ref())
                    .map(|m| m.velocity())
                    .unwrap_or_default();
                AgentSampleRow {
                    agent_id: i as u32,
                    frame,
                    x: agents.position[i].x,
                    y: agents.position[i].y,
                    vx: velocity.x,
                    vy: velocity.y,
                    heading_rad: agents.rotation[i],
                }
            })
            .collect();
        let result = self.writer.write_samples(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_frame: u64) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
