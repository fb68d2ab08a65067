//! Error types for the HTTP layer.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use nirmal_store::StoreError;
use serde_json::json;
use thiserror::Error;

/// Errors returned from request handlers.
///
/// Every variant renders as `{"message": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be read as JSON.
    #[error("{0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("{0}")]
    NotFound(String),

    /// Error from one of the stores.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(err) => match err {
                StoreError::Validation(_) | StoreError::Conflict(_) => StatusCode::BAD_REQUEST,
                StoreError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
                StoreError::NotFound(_) => StatusCode::NOT_FOUND,
                StoreError::Io(_) | StoreError::Serialization(_) | StoreError::IdExhausted => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            ApiError::Store(err) if err.is_internal() => {
                tracing::error!(error = %err, "Storage failure");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (StoreError::Validation("Missing fields".into()), StatusCode::BAD_REQUEST),
            (StoreError::Conflict("User already exists".into()), StatusCode::BAD_REQUEST),
            (StoreError::Unauthorized("Invalid credentials".into()), StatusCode::UNAUTHORIZED),
            (StoreError::NotFound("Not found".into()), StatusCode::NOT_FOUND),
            (StoreError::IdExhausted, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn test_client_message_passes_through() {
        let err = ApiError::from(StoreError::Conflict("User already exists".into()));
        assert_eq!(err.to_string(), "User already exists");
    }
}
