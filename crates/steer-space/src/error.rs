//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `steer-space`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpaceError {
    /// An indexed flow-field access named a cell outside the grid.  Carries
    /// the offending indices as requested by the caller.
    #[error("there is no cell at row {row}, column {column}")]
    InvalidCell { row: i32, column: i32 },
}

pub type SpaceResult<T> = Result<T, SpaceError>;
