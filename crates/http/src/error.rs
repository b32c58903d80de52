//! Error handling for the bookshelf HTTP layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Application error types that map to HTTP responses.
///
/// Every variant renders as a flat `{"error": <message>}` JSON body.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Create a bad request error from a validation or deserialization message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create an internal error carrying the underlying cause for logging.
    /// Only `message` is exposed to the client.
    pub fn internal(message: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Internal {
            message: message.into(),
            source,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4();

        let (status, message) = match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message, source } => {
                tracing::error!(
                    error_id = %error_id,
                    error = ?source,
                    "internal error: {message}"
                );
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        if status != StatusCode::INTERNAL_SERVER_ERROR {
            tracing::debug!(
                error_id = %error_id,
                status_code = %status.as_u16(),
                "request error: {message}"
            );
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_bad_request_mapping() {
        let error = AppError::bad_request("title must not be empty");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_mapping() {
        let error = AppError::not_found("Book not found");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_error_mapping() {
        let source = anyhow::anyhow!("database connection failed");
        let error = AppError::internal("Failed to fetch books", source);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_hides_source() {
        let source = anyhow::anyhow!("unable to open database file");
        let error = AppError::internal("Failed to fetch books", source);
        assert_eq!(error.to_string(), "Failed to fetch books");
    }
}
