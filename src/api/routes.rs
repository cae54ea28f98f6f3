//! Route definitions for the API.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::auth::{require_session, AUTH_COOKIE_NAME};
use crate::AppState;

/// Security scheme modifier for OpenAPI.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(AUTH_COOKIE_NAME))),
            );
        }
    }
}

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health_check,
        handlers::login,
        handlers::logout,
        handlers::verify,
    ),
    components(schemas(
        crate::api::types::HealthResponse,
        crate::api::types::LoginRequest,
        crate::api::types::SessionResponse,
        crate::api::types::VerifyResponse,
        crate::auth::Identity,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Login and session endpoints"),
        (name = "health", description = "Health and status endpoints")
    ),
    info(
        title = "Transcribe Gate API",
        version = "0.1.0",
        description = "Authentication gateway for the audio transcription web app",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    // Routes requiring a session cookie
    let protected_routes = Router::new()
        .route("/api/auth/verify", get(handlers::verify))
        .layer(middleware::from_fn_with_state(
            state.tokens.clone(),
            require_session,
        ));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/api/auth/login", post(handlers::login))
        .route("/api/auth/logout", post(handlers::logout))
        .with_state(state)
        .route("/api/health", get(handlers::health_check));

    Router::new()
        .merge(protected_routes)
        .merge(public_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
