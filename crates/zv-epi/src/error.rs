use thiserror::Error;
use zv_core::{AgentId, ZvError};

#[derive(Debug, Error)]
pub enum EpiError {
    /// Secondary cases or an episode snapshot were requested for a human
    /// who is not currently sick.
    #[error("agent {0} is not sick")]
    NotSick(AgentId),

    #[error(transparent)]
    Registry(#[from] ZvError),
}

pub type EpiResult<T> = Result<T, EpiError>;
