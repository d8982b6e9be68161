use std::time::Duration;

use axum::http::{header, HeaderMap, HeaderValue};

pub const SESSION_COOKIE: &str = "Authorization";
pub const SESSION_COOKIE_PATH: &str = "/auth";

/// Builds the `Set-Cookie` value carrying the session token.
///
/// Secure mode is meant for cross-origin deployments over TLS (`Secure`, `SameSite=None`,
/// `Partitioned`); otherwise the cookie is same-site only (`SameSite=Lax`). Both are `HttpOnly`.
pub fn session_cookie(token: &str, ttl: Duration, secure: bool) -> anyhow::Result<HeaderValue> {
    build(token, ttl.as_secs(), secure)
}

/// Expires the session cookie on the client.
pub fn clear_session_cookie(secure: bool) -> anyhow::Result<HeaderValue> {
    build("", 0, secure)
}

fn build(value: &str, max_age: u64, secure: bool) -> anyhow::Result<HeaderValue> {
    let mut cookie = format!(
        "{SESSION_COOKIE}={value}; Path={SESSION_COOKIE_PATH}; Max-Age={max_age}; HttpOnly"
    );
    if secure {
        cookie.push_str("; Secure; SameSite=None; Partitioned");
    } else {
        cookie.push_str("; SameSite=Lax");
    }
    Ok(HeaderValue::from_str(&cookie)?)
}

/// Returns the session token from the request's `Cookie` headers, if any.
pub fn read_session_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value)
}
