use steer_core::AgentId;
use steer_motion::MotionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("no agent {0} in the store")]
    UnknownAgent(AgentId),

    #[error("agent {0} already has a motion manager")]
    DuplicateManager(AgentId),

    #[error("motion step failed: {0}")]
    Motion(#[from] MotionError),
}

pub type SimResult<T> = Result<T, SimError>;
