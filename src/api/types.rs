//! API request/response types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ==================== Health ====================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Timestamp.
    pub timestamp: String,
}

// ==================== Authentication ====================

/// Login request.
///
/// Missing fields deserialize as empty and are rejected by the handler.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// User email.
    #[serde(default)]
    pub email: String,
    /// User password.
    #[serde(default)]
    pub password: String,
}

/// Login/logout response. The token itself travels in `Set-Cookie`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub success: bool,
    pub message: String,
}

/// Session verification response.
#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyResponse {
    pub authenticated: bool,
    /// Identity asserted by the session token.
    pub email: String,
}
