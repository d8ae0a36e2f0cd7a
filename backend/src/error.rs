//! Error taxonomy for the HTTP API.
//!
//! Handlers and helpers return `Result<_, ApiError>`; the `ResponseError`
//! impl turns each variant into the status code and `{"error": msg}` body
//! the client expects. Best-effort failures (old-image cleanup, gallery
//! metadata persistence) are logged at their call sites instead of being
//! surfaced through this type.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing required fields, disallowed file extensions, malformed input.
    #[error("{0}")]
    Validation(String),

    /// The addressed record or gallery id does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Invalid credentials or no valid session.
    #[error("{0}")]
    Unauthorized(String),

    /// Hard file-system failure (e.g. gallery file deletion).
    #[error("{0}")]
    Storage(String),

    /// Database failure; fatal to the request, never retried.
    #[error("{0}")]
    Database(String),
}

impl From<rusqlite::Error> for ApiError {
    fn from(err: rusqlite::Error) -> Self {
        ApiError::Database(err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Storage(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Storage(_) | ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_expected_status_codes() {
        assert_eq!(
            ApiError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Unauthorized("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Storage("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
