//! Typed errors for fitting, applying and persisting the price model.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model has not been fitted yet")]
    NotFitted,

    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("training set is empty")]
    EmptyTrainingSet,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Reading or writing the model artifact failed
    #[error("artifact I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The model artifact could not be (de)serialized
    #[error("artifact format error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
