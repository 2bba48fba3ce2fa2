//! The `sessionId` cookie: reading it from requests and building the
//! `Set-Cookie` values that issue and clear it.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "sessionId";

/// Find the session token among the request's `Cookie` headers.
///
/// Returns `None` when the cookie is missing, empty, or the header is not
/// valid ASCII.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .filter(|token| !token.is_empty())
}

/// `Set-Cookie` value issuing `token`.
pub fn issue(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; HttpOnly; Path=/; SameSite=Lax")
}

/// `Set-Cookie` value that makes the browser drop the session cookie.
pub fn clear() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; Path=/; SameSite=Lax; Max-Age=0")
}
