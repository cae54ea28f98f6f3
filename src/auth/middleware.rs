//! Authentication middleware for axum.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header::COOKIE, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::auth::{token_from_cookies, TokenService};

/// Error response for authentication failures.
#[derive(Debug, Serialize)]
pub struct AuthError {
    pub error: String,
    pub code: String,
}

impl AuthError {
    fn unauthenticated() -> Self {
        Self {
            error: "Not authenticated".to_string(),
            code: "UNAUTHENTICATED".to_string(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, Json(self)).into_response()
    }
}

/// Extract the session token from the request cookies.
fn session_token(request: &Request<Body>) -> Option<String> {
    request
        .headers()
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(token_from_cookies)
        .map(String::from)
}

/// Require a valid session cookie.
///
/// Missing, invalid and expired tokens all get the same 401 so clients
/// cannot tell why a token was refused.
pub async fn require_session(
    State(tokens): State<TokenService>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let token = session_token(&request).ok_or_else(AuthError::unauthenticated)?;

    let identity = tokens
        .verify_token(&token)
        .ok_or_else(AuthError::unauthenticated)?;

    // Add identity to request extensions for handlers to access
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_across_cookie_headers() {
        let request = axum::http::Request::builder()
            .header(COOKIE, "theme=dark")
            .header(COOKIE, "auth-token=abc.def.ghi")
            .body(Body::empty())
            .unwrap();

        assert_eq!(session_token(&request).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_no_cookie_no_token() {
        let request = axum::http::Request::builder().body(Body::empty()).unwrap();
        assert!(session_token(&request).is_none());
    }
}
