//! Base error type.
//!
//! Engine paths (integration, steering, animation) never fail; they apply
//! documented fallbacks instead.  Errors only surface at the command and
//! configuration boundary.  Sub-crates wrap `MfError` as one variant of their
//! own enums.

use thiserror::Error;

use crate::AgentId;

#[derive(Debug, Error)]
pub enum MfError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for the `mf-*` crates.
pub type MfResult<T> = Result<T, MfError>;
