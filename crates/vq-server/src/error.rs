//! HTTP error types for the site server.
//!
//! Maps domain errors from `vq-core` into HTTP responses. Every error
//! variant produces a JSON body with a machine-readable `error` field and a
//! human-readable `message`.
//!
//! A blocked flow transition is not an error and never passes through here.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use vq_core::error::{LeadError, SessionError};

/// Application-level error returned from HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Requested resource not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Client sent invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// The server is at capacity.
    #[error("service unavailable: {0}")]
    Unavailable(String),
    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            Self::Unavailable(msg) => {
                tracing::warn!(reason = %msg, "request refused at capacity");
                (StatusCode::SERVICE_UNAVAILABLE, "unavailable", msg)
            }
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "internal server error".to_owned(),
                )
            }
        };

        let body = ErrorBody {
            error: error_type,
            message,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound { .. } | SessionError::Expired { .. } => {
                Self::NotFound(err.to_string())
            }
            SessionError::Flow(_) => Self::BadRequest(err.to_string()),
            SessionError::Capacity { .. } => Self::Unavailable(err.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<LeadError> for AppError {
    fn from(err: LeadError) -> Self {
        match err {
            LeadError::MissingField { .. } => Self::BadRequest(err.to_string()),
            LeadError::Delivery { .. } | LeadError::Serialization { .. } => {
                Self::Internal(err.to_string())
            }
        }
    }
}
