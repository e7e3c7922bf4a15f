use thiserror::Error;
use zv_core::ZvError;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error("unknown dataset {0:?}")]
    UnknownDataset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Registry(#[from] ZvError),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
