//! Error types for the transcription gateway.
//!
//! Defines a unified error type that maps cleanly to HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Unified error type for gateway operations.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body for API clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            GateError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None)
            }
            GateError::MalformedBody(rejection) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                "Malformed request body".to_string(),
                Some(rejection.body_text()),
            ),
            GateError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone(), None)
            }
            GateError::Config(msg) => {
                // Operators see the reason in logs, clients only get the category
                tracing::error!(error = %msg, "Configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIG_ERROR",
                    "Configuration error".to_string(),
                    None,
                )
            }
            GateError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for gateway operations.
pub type GateResult<T> = Result<T, GateError>;
