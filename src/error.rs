//! Error types for the name service.
//!
//! Request handlers catch every error and surface it as a JSON error object
//! with the status code mapped below; there is no retry policy.

use http::StatusCode;
use thiserror::Error;

/// Result type alias for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Error types surfaced by request handlers.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// HTTP error from hyper
    #[error("http error: {0}")]
    Http(#[from] hyper::http::Error),

    /// Body streaming error
    #[error("body error: {0}")]
    Body(String),

    /// JSON (de)serialization failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Client sent a request we cannot interpret
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Missing or invalid bearer token
    #[error("unauthorized")]
    Unauthorized,

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServiceError {
    /// Returns an HTTP status code appropriate for this error.
    #[inline]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::BadRequest(_) | ServiceError::Json(_) => StatusCode::BAD_REQUEST,
            ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ServiceError::BadRequest("q".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::Unauthorized.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ServiceError::Body("eof".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
