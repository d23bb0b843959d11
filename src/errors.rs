//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::config::{MSG_DUPLICATE_EMAIL, MSG_DUPLICATE_PRODUCT, MSG_INVALID_EMAIL};

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Registration
    #[error("{}", MSG_DUPLICATE_EMAIL)]
    DuplicateEmail,

    #[error("{0}")]
    InvalidPassword(String),

    #[error("{}", MSG_INVALID_EMAIL)]
    InvalidEmailFormat,

    // Catalog
    #[error("{}", MSG_DUPLICATE_PRODUCT)]
    DuplicateProductName,

    /// A referenced entity (artisan, category) does not exist.
    /// Reported as a client error on write and list endpoints.
    #[error("{0}")]
    UnknownReference(String),

    #[error("{0}")]
    NotFound(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::DuplicateEmail => "DUPLICATE_EMAIL",
            AppError::InvalidPassword(_) => "INVALID_PASSWORD",
            AppError::InvalidEmailFormat => "INVALID_EMAIL_FORMAT",
            AppError::DuplicateProductName => "DUPLICATE_PRODUCT",
            AppError::UnknownReference(_) | AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::DuplicateEmail
            | AppError::InvalidPassword(_)
            | AppError::InvalidEmailFormat
            | AppError::DuplicateProductName
            | AppError::UnknownReference(_)
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
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

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            code: self.code().to_string(),
            message: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    /// Map `None` to a 404 with the given message.
    fn ok_or_not_found(self, message: &str) -> AppResult<T>;

    /// Map `None` to a 400 unknown-reference error with the given message.
    fn ok_or_unknown(self, message: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, message: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(message.to_string()))
    }

    fn ok_or_unknown(self, message: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::UnknownReference(message.to_string()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn unknown_reference(msg: impl Into<String>) -> Self {
        AppError::UnknownReference(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// True when the database rejected a write because of a unique index.
    pub fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
        matches!(
            err.sql_err(),
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
        )
    }
}
