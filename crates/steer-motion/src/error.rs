//! Motion-subsystem error type.

use steer_core::{BehaviorId, SteerError};
use thiserror::Error;

/// Errors produced by `steer-motion`.
#[derive(Debug, Error)]
pub enum MotionError {
    /// A behavior handle that was never issued by this manager.
    #[error("behavior {0} is not attached to this manager")]
    UnknownBehavior(BehaviorId),

    #[error("agent lookup failed: {0}")]
    Agent(#[from] SteerError),
}

pub type MotionResult<T> = Result<T, MotionError>;
