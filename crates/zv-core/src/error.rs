//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `ZvError` as one variant
//! via `#[from]`, so registry and configuration failures bubble up unchanged.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `zv-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum ZvError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("agent {0} is already registered")]
    DuplicateAgent(AgentId),

    #[error("agent {0} is not a human")]
    NotHuman(AgentId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `zv-*` crates.
pub type ZvResult<T> = Result<T, ZvError>;
