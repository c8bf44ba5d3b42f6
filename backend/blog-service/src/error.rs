//! Error types for the blog service.
//!
//! Errors are converted to JSON HTTP responses of the shape
//! `{"error": <message>}`. Validation and not-found errors carry their
//! message through to the client; everything else surfaces as a generic
//! 500 and is logged server-side.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::fmt;

/// Result type for blog-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Database operation failed
    DatabaseError(String),

    /// Request body failed validation
    BadRequest(String),

    /// Resource not found
    NotFound(String),

    /// Internal server error
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DatabaseError(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }

        // Client-facing message: exact for 4xx, generic for 5xx.
        let message = match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::DatabaseError(_) | AppError::Internal(_) => {
                "Internal server error".to_string()
            }
        };

        HttpResponse::build(status).json(serde_json::json!({
            "error": message,
        }))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_its_message() {
        let err = AppError::NotFound("Post not found".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Not found: Post not found");
    }

    #[test]
    fn database_errors_map_to_500() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
