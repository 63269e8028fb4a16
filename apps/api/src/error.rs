//! API error types with IntoResponse.
//!
//! Every failure leaves the server as `{"error": <message>}`, plus a
//! `details` string for rejected input.
//!
//! ```text
//! JsonRejection / PathRejection ──► ApiError::InvalidInput  ──► 400
//! DbError                       ──► ApiError::Database      ──► 500 (logged)
//! failed liveness check         ──► ApiError::Unavailable   ──► 503
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use pizzeria_db::DbError;

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// API error type with automatic HTTP status mapping.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body or path could not be bound (400).
    #[error("Invalid input: {details}")]
    InvalidInput { details: String },

    /// Store operation failed (500, logged).
    #[error(transparent)]
    Database(#[from] DbError),

    /// Store is not answering (503).
    #[error("Database unavailable")]
    Unavailable,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Local: a module-level `error` import clashes with `#[error]`
        use tracing::{debug, error, warn};

        let status = self.status();

        let body = match &self {
            ApiError::InvalidInput { details } => {
                debug!(%details, "Rejected request input");
                json!({
                    "error": "Invalid input",
                    "details": details
                })
            }
            ApiError::Database(e) => {
                // Log the actual error, return generic message
                error!(error = %e, "Database error");
                let message = match e {
                    DbError::ForeignKeyViolation { .. } => "Invalid reference",
                    _ => "Database operation failed",
                };
                json!({ "error": message })
            }
            ApiError::Unavailable => {
                warn!("Health check failed: database unavailable");
                json!({ "error": "Database unavailable" })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput {
            details: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidInput {
            details: rejection.body_text(),
        }
    }
}
