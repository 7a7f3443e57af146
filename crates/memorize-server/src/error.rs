//! Error types for the server.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Server error type.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The request was missing data or malformed.
    #[error("{0}")]
    BadRequest(String),

    /// The deck store failed.
    #[error("Storage error: {0}")]
    Storage(#[source] memorize_store::Error),

    /// The listener could not be bound or the server stopped unexpectedly.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<memorize_store::Error> for ServerError {
    fn from(e: memorize_store::Error) -> Self {
        match e {
            memorize_store::Error::Validation(msg) => ServerError::BadRequest(msg),
            other => ServerError::Storage(other),
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Storage(_) | ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "Server error");
        } else {
            tracing::warn!(status = %status, error = %message, "Client error");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_becomes_bad_request() {
        let err: ServerError =
            memorize_store::Error::Validation("deck name is required".into()).into();
        assert!(matches!(err, ServerError::BadRequest(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_storage_failure_is_internal() {
        let err: ServerError = memorize_store::Error::Poisoned.into();
        assert!(matches!(err, ServerError::Storage(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_bad_request_message_is_unprefixed() {
        let err = ServerError::BadRequest("No text provided".to_string());
        assert_eq!(err.to_string(), "No text provided");
    }
}
