//! Session cookie plumbing
//!
//! Sessions ride in a single `sid` cookie carrying the opaque token issued
//! at login. Parsing is deliberately minimal: find the pair, take the
//! value. No signing, no expiry; the token is random enough for a lab.

use crate::state::AppState;
use axum::http::{header, HeaderMap};

/// Cookie name carrying the session token.
pub const SESSION_COOKIE: &str = "sid";

/// Extract the session token from a request's Cookie header, if any.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';')
        .map(str::trim)
        .find_map(|pair| match pair.split_once('=') {
            Some((name, value)) if name == SESSION_COOKIE => Some(value.to_string()),
            _ => None,
        })
}

/// Resolve the logged-in username for a request, if any.
pub fn session_user(state: &AppState, headers: &HeaderMap) -> Option<String> {
    session_token(headers).and_then(|token| state.sessions.resolve(&token))
}

/// `Set-Cookie` value installing a session token.
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value clearing the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
