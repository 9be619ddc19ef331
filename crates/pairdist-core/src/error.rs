use thiserror::Error;

#[derive(Debug, Error)]
pub enum DistError {
    #[error("dimension mismatch: {0}")]
    Mismatch(String),
    #[error("invalid input: {0}")]
    Invalid(String),
}

pub type DistResult<T> = Result<T, DistError>;
