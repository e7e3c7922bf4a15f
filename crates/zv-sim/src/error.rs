use thiserror::Error;
use zv_core::ZvError;
use zv_epi::EpiError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Registry(#[from] ZvError),

    #[error("epidemiology error: {0}")]
    Epi(#[from] EpiError),
}

pub type SimResult<T> = Result<T, SimError>;
