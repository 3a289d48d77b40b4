//! Shared error type.
//!
//! Degenerate numeric cases (zero-length vectors, empty flocks, destroyed
//! agents) are handled by policy and never reach this type.  Errors are only
//! produced at validation boundaries and when a caller names an agent that
//! the flock does not own.

use thiserror::Error;

use crate::AgentId;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("agent ids exhausted: requested {requested}, {available} left")]
    IdsExhausted { requested: usize, available: usize },
}

/// Shorthand result type for all `flock-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
