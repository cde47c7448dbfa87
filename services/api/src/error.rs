//! Custom error types for the storefront API

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Custom error type for the storefront API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed or missing input, caught before persistence
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced id absent
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Registration conflict on an already-used email
    #[error("User with this email already exists")]
    DuplicateEmail,

    /// Login failure, intentionally undifferentiated between unknown email
    /// and wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Order references a product id that does not exist
    #[error("Product with ID {0} not found")]
    ProductNotFound(i32),

    /// Order references a soft-deleted product
    #[error("Product \"{0}\" is not active")]
    ProductInactive(String),

    /// Missing or invalid session token
    #[error("Unauthorized")]
    Unauthorized,

    /// Valid session token but insufficient role
    #[error("Forbidden")]
    Forbidden,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal server error
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::DuplicateEmail => StatusCode::CONFLICT,
            ApiError::InvalidCredentials | ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::ProductNotFound(_) | ApiError::ProductInactive(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Never leak internal failure detail to clients
        let error_message = match &self {
            ApiError::Database(_) => "Database error".to_string(),
            ApiError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
