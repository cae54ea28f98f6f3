//! Session cookie handling.

/// Cookie carrying the session token.
pub const AUTH_COOKIE_NAME: &str = "auth-token";

/// Build the `Set-Cookie` value for a freshly issued token.
pub fn build_session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Strict",
        AUTH_COOKIE_NAME, token, max_age_secs
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Build a `Set-Cookie` value that makes the browser drop the session.
pub fn build_clear_cookie(secure: bool) -> String {
    build_session_cookie("", 0, secure)
}

/// Extract the session token from a `Cookie` header value.
pub fn token_from_cookies(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == AUTH_COOKIE_NAME)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}
