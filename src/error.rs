//! Error types for the student registry
//!
//! Every handler returns `Result<_, StudentError>`; the variant decides the
//! HTTP status and the message ends up in the JSON error envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::service::ServiceError;

// == Student Error Enum ==
/// Unified error type for the student handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StudentError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// The requested student does not exist
    #[error("{0}")]
    NotFound(String),

    /// No caller identity on the request
    #[error("{0}")]
    Unauthorized(String),

    /// Failure reported by the service layer
    #[error("{message}")]
    Service { status: u16, message: String },
}

impl StudentError {
    /// Builds a `Service` error from a service failure, filling in the
    /// default status (500) and the operation's default message.
    pub fn from_service(err: ServiceError, default_message: &str) -> Self {
        StudentError::Service {
            status: err.status.unwrap_or(500),
            message: err
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| default_message.to_string()),
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            StudentError::Validation(_) => StatusCode::BAD_REQUEST,
            StudentError::NotFound(_) => StatusCode::NOT_FOUND,
            StudentError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            StudentError::Service { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "{}", self);
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the handlers.
pub type Result<T> = std::result::Result<T, StudentError>;
