//! `steer-trace` — trajectory recording for the rust_steer engine.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature  | Backend | Files created                               |
//! |----------|---------|---------------------------------------------|
//! | *(none)* | CSV     | `agent_samples.csv`, `frame_summaries.csv`  |
//! | `sqlite` | SQLite  | `trace.db`                                  |
//!
//! Both backends implement [`TraceWriter`] and are driven by
//! [`TraceObserver`], which implements `steer_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use steer_trace::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./trace"))?;
//! let mut obs = TraceObserver::new(writer);
//! sim.run_frames(600, 0.016, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("trace error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvTraceWriter;
pub use error::{TraceError, TraceResult};
pub use observer::TraceObserver;
pub use row::{AgentSampleRow, FrameSummaryRow};
pub use writer::TraceWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteTraceWriter;
