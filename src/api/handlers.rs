//! HTTP request handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header::SET_COOKIE,
    response::IntoResponse,
    Extension, Json,
};

use crate::api::types::*;
use crate::auth::{build_clear_cookie, build_session_cookie, Identity};
use crate::error::{GateError, GateResult};
use crate::AppState;

/// Health check endpoint.
///
/// GET /api/health
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

// ==================== Authentication Endpoints ====================

/// Login and receive a session cookie.
///
/// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = SessionResponse),
        (status = 400, description = "Malformed body, or email and password missing"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> GateResult<impl IntoResponse> {
    let Json(request) = payload?;

    if request.email.is_empty() || request.password.is_empty() {
        return Err(GateError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    if !state
        .credentials
        .verify_credentials(&request.email, &request.password)
    {
        tracing::warn!(email = %request.email, "Failed login attempt");
        return Err(GateError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = state.tokens.generate_token(&request.email)?;
    let cookie = build_session_cookie(
        &token,
        state.tokens.token_ttl_seconds(),
        state.secure_cookie,
    );

    tracing::info!(email = %request.email, "User logged in");

    Ok((
        [(SET_COOKIE, cookie)],
        Json(SessionResponse {
            success: true,
            message: "Login successful".to_string(),
        }),
    ))
}

/// Clear the session cookie.
///
/// The token itself stays valid until it expires.
///
/// POST /api/auth/logout
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = SessionResponse)
    ),
    tag = "auth"
)]
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(SET_COOKIE, build_clear_cookie(state.secure_cookie))],
        Json(SessionResponse {
            success: true,
            message: "Logged out".to_string(),
        }),
    )
}

/// Check the session cookie and return the logged-in identity.
///
/// GET /api/auth/verify
#[utoipa::path(
    get,
    path = "/api/auth/verify",
    responses(
        (status = 200, description = "Session is valid", body = VerifyResponse),
        (status = 401, description = "Not authenticated")
    ),
    security(("session_cookie" = [])),
    tag = "auth"
)]
pub async fn verify(Extension(identity): Extension<Identity>) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        authenticated: true,
        email: identity.email,
    })
}
