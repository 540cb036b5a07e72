//! CSV trace backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_samples.csv`
//! - `frame_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{AgentSampleRow, FrameSummaryRow, TraceResult};

/// Writes the trace to two CSV files.
pub struct CsvTraceWriter {
    samples: Writer<File>,
    summaries: Writer<File>,
    finished: bool,
}

impl CsvTraceWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> TraceResult<Self> {
        let mut samples = Writer::from_path(dir.join("agent_samples.csv"))?;
        samples.write_record(["agent_id", "frame", "x", "y", "vx", "vy", "heading_rad"])?;

        let mut summaries = Writer::from_path(dir.join("frame_summaries.csv"))?;
        summaries.write_record(["frame", "sim_time_secs", "steered_agents"])?;

        Ok(Self { samples, summaries, finished: false })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_samples(&mut self, rows: &[AgentSampleRow]) -> TraceResult<()> {
        for row in rows {
            self.samples.write_record(&[
                row.agent_id.to_string(),
                row.frame.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.vx.to_string(),
                row.vy.to_string(),
                row.heading_rad.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> TraceResult<()> {
        self.summaries.write_record(&[
            row.frame.to_string(),
            row.sim_time_secs.to_string(),
            row.steered_agents.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> TraceResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.samples.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
