//! SQLite trace backend (feature `sqlite`).
//!
//! Creates a single `trace.db` file in the configured output directory with
//! two tables: `agent_samples` and `frame_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::TraceWriter;
use crate::{AgentSampleRow, FrameSummaryRow, TraceResult};

/// Writes the trace to an SQLite database.
pub struct SqliteTraceWriter {
    conn: Connection,
    finished: bool,
}

impl SqliteTraceWriter {
    /// Open (or create) `trace.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> TraceResult<Self> {
        let conn = Connection::open(dir.join("trace.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS agent_samples (
                 agent_id    INTEGER NOT NULL,
                 frame       INTEGER NOT NULL,
                 x           REAL NOT NULL,
                 y           REAL NOT NULL,
                 vx          REAL NOT NULL,
                 vy          REAL NOT NULL,
                 heading_rad REAL NOT NULL
             );
             CREATE TABLE IF NOT EXISTS frame_summaries (
                 frame          INTEGER PRIMARY KEY,
                 sim_time_secs  REAL NOT NULL,
                 steered_agents INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl TraceWriter for SqliteTraceWriter {
    fn write_samples(&mut self, rows: &[AgentSampleRow]) -> TraceResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO agent_samples \
                 (agent_id, frame, x, y, vx, vy, heading_rad) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.agent_id,
                    row.frame,
                    row.x as f64,
                    row.y as f64,
                    row.vx as f64,
                    row.vy as f64,
                    row.heading_rad as f64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> TraceResult<()> {
        self.conn.execute(
            "INSERT INTO frame_summaries (frame, sim_time_secs, steered_agents) \
             VALUES (?1, ?2, ?3)",
            rusqlite::params![row.frame, row.sim_time_secs as f64, row.steered_agents],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> TraceResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
