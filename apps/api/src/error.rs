//! API error type and its HTTP mapping.
//!
//! ## Status Mapping
//! ```text
//! Validation / InsufficientStock / Conflict  → 400
//! Unauthorized                               → 401
//! NotFound                                   → 404
//! Storage / Internal                         → 500
//! ```
//!
//! Failure bodies follow the uniform envelope: `{success:false, error}` for
//! inventory errors and `{success:false, message}` for auth errors
//! (Unauthorized/Conflict), matching what clients of the original API expect.
//! Storage faults are logged here and surfaced as an opaque 500; they are
//! never retried or downgraded to a success.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use sweetshop_core::{CoreError, ValidationError};
use sweetshop_db::DbError;

/// Application-level errors, one variant per failure class a client can see.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad input shape or range; never reached storage.
    #[error("{0}")]
    Validation(String),

    /// Entity absent.
    #[error("{0}")]
    NotFound(String),

    /// Duplicate unique key (registration with a taken email).
    #[error("{0}")]
    Conflict(String),

    /// Auth or token failure.
    #[error("{0}")]
    Unauthorized(String),

    /// Domain rule violation, distinct from generic validation.
    #[error("{0}")]
    InsufficientStock(String),

    /// Opaque collaborator-level storage fault, surfaced as-is.
    #[error("{0}")]
    Storage(String),

    /// Anything else unexpected (token encoding, hashing).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InsufficientStock(_) | ApiError::Conflict(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::SweetNotFound(_) => ApiError::NotFound(err.to_string()),
            CoreError::InsufficientStock { .. } => ApiError::InsufficientStock(err.to_string()),
            CoreError::UserAlreadyExists => ApiError::Conflict(err.to_string()),
            CoreError::InvalidCredentials | CoreError::InvalidToken => {
                ApiError::Unauthorized(err.to_string())
            }
            CoreError::Validation(v) => v.into(),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            // The only unique key in the schema is users.email; a violation
            // here means two registrations raced past the lookup.
            DbError::UniqueViolation { .. } => {
                ApiError::Conflict(CoreError::UserAlreadyExists.to_string())
            }
            other => ApiError::Storage(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "Request failed with storage/internal error");
        }

        let body = match &self {
            ApiError::Unauthorized(msg) | ApiError::Conflict(msg) => {
                json!({ "success": false, "message": msg })
            }
            other => json!({ "success": false, "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
