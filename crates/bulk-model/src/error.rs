use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown completion policy: {0}")]
    UnknownCompletion(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
