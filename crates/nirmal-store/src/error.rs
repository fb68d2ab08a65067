//! Error types for the store crate.

use nirmal_core::ValidationError;
use thiserror::Error;

/// Errors returned by the stores.
///
/// The first four variants are client errors carrying the message shown to
/// API callers. The rest are storage faults.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required field was missing or empty.
    #[error("{0}")]
    Validation(String),

    /// Bad credentials or officer code.
    #[error("{0}")]
    Unauthorized(String),

    /// The record already exists.
    #[error("{0}")]
    Conflict(String),

    /// No record with the requested id.
    #[error("{0}")]
    NotFound(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No complaint id is left to assign.
    #[error("complaint id space exhausted")]
    IdExhausted,
}

impl StoreError {
    /// Whether this error is a storage fault rather than a client error.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            StoreError::Io(_) | StoreError::Serialization(_) | StoreError::IdExhausted
        )
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Validation(err.message)
    }
}
