//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Domain failures
    #[error("Employee not found")]
    NotFound,

    #[error("Email already taken")]
    DuplicateEmail,

    // Request shape
    #[error("Invalid input: {0}")]
    BadRequest(String),

    // External service errors
    #[error("Database error: {0}")]
    Database(DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::DuplicateEmail => "DUPLICATE_EMAIL",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::DuplicateEmail => StatusCode::CONFLICT,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this is a rejected request rather than a system fault
    pub fn is_domain_failure(&self) -> bool {
        matches!(self, AppError::NotFound | AppError::DuplicateEmail)
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),

            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }
}

/// Translate store failures, surfacing the `employees.email` unique index
/// as a domain failure.
impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
            tracing::debug!("Unique constraint violated: {}", detail);
            return AppError::DuplicateEmail;
        }

        match err {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => AppError::NotFound,
            other => AppError::Database(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.is_domain_failure() {
            tracing::debug!(code = self.code(), "Request rejected");
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::DuplicateEmail.status(), StatusCode::CONFLICT);
        assert_eq!(AppError::bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_domain_failures() {
        assert!(AppError::NotFound.is_domain_failure());
        assert!(AppError::DuplicateEmail.is_domain_failure());
        assert!(!AppError::internal("boom").is_domain_failure());
    }

    #[test]
    fn test_record_not_updated_maps_to_not_found() {
        let err = AppError::from(DbErr::RecordNotUpdated);
        assert!(matches!(err, AppError::NotFound));
    }

    #[test]
    fn test_other_db_errors_stay_opaque() {
        let err = AppError::from(DbErr::Custom("connection reset".to_string()));
        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(err.user_message(), "A database error occurred");
    }

    #[test]
    fn test_ok_or_not_found() {
        assert_eq!(Some(3).ok_or_not_found().unwrap(), 3);
        assert!(matches!(None::<i32>.ok_or_not_found(), Err(AppError::NotFound)));
    }
}
