//! Service error types with HTTP status code mapping.
//!
//! [`VoteboxError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "detail": "invalid choice: \"fish\"; vote must be \"dog\" or \"cat\""
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable detail.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`VoteboxError`]).
    pub code: u32,
    /// Human-readable error detail.
    pub detail: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status                 |
/// |-----------|------------|-----------------------------|
/// | 1000–1999 | Validation | 400 Bad Request             |
/// | 3000–3999 | Server     | 500 / 503                   |
#[derive(Debug, thiserror::Error)]
pub enum VoteboxError {
    /// Submitted choice is outside the accepted set.
    #[error("invalid choice: {0:?}; vote must be \"dog\" or \"cat\"")]
    InvalidChoice(String),

    /// The backing store could not be reached.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A write was rejected by the backing store.
    #[error("write failed: {0}")]
    WriteFailed(String),

    /// Startup connection retry exhausted its attempt budget.
    #[error("database connection failed after {attempts} attempts")]
    ConnectionExhausted {
        /// Number of attempts made before giving up.
        attempts: u32,
    },

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl VoteboxError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidChoice(_) => 1001,
            Self::WriteFailed(_) => 3001,
            Self::StorageUnavailable(_) => 3002,
            Self::ConnectionExhausted { .. } => 3003,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidChoice(_) => StatusCode::BAD_REQUEST,
            Self::StorageUnavailable(_) | Self::ConnectionExhausted { .. } => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::WriteFailed(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the detail string exposed to the client.
    ///
    /// Validation errors carry their full message; server-class errors
    /// are reduced to a generic detail so storage internals never reach
    /// the client.
    #[must_use]
    pub fn client_detail(&self) -> String {
        match self {
            Self::InvalidChoice(_) => self.to_string(),
            Self::StorageUnavailable(_) | Self::ConnectionExhausted { .. } => {
                "service temporarily unavailable".to_string()
            }
            Self::WriteFailed(_) | Self::Internal(_) => "internal server error".to_string(),
        }
    }
}

impl IntoResponse for VoteboxError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        } else {
            tracing::warn!(code = self.error_code(), error = %self, "request rejected");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                detail: self.client_detail(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
