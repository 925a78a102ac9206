use mf_behavior::BehaviorError;
use mf_core::{AgentId, MfError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("world configuration error: {0}")]
    Config(String),

    #[error("agent not found: {0}")]
    AgentNotFound(AgentId),

    #[error("{what} length {got} does not match agent count {expected}")]
    PoolSizeMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    Core(#[from] MfError),

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),
}

pub type SimResult<T> = Result<T, SimError>;
