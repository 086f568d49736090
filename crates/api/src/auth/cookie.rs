//! The `auth_token` session cookie.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

/// Name of the cookie that carries the session token.
pub const AUTH_COOKIE: &str = "auth_token";

/// Build the `Set-Cookie` value that stores a freshly issued token.
///
/// `secure` adds the `Secure` attribute; it is set in production only so
/// the cookie still works over plain HTTP during local development.
pub fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie =
        format!("{AUTH_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Build the `Set-Cookie` value that removes the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{AUTH_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Find a cookie value by name across all `Cookie` headers.
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn session_cookie_attributes() {
        let cookie = session_cookie("abc.def.ghi", 86400, false);
        assert_eq!(
            cookie,
            "auth_token=abc.def.ghi; Path=/; HttpOnly; SameSite=Lax; Max-Age=86400"
        );
        assert!(session_cookie("t", 60, true).ends_with("; Secure"));
    }

    #[test]
    fn clearing_expires_immediately() {
        assert!(clear_session_cookie().contains("Max-Age=0"));
        assert!(clear_session_cookie().starts_with("auth_token=;"));
    }

    #[test]
    fn reads_named_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark; auth_token=xyz; lang=en"));
        assert_eq!(read_cookie(&headers, AUTH_COOKIE), Some("xyz"));
        assert_eq!(read_cookie(&headers, "missing"), None);
    }

    #[test]
    fn reads_across_multiple_cookie_headers() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(COOKIE, HeaderValue::from_static("auth_token=second"));
        assert_eq!(read_cookie(&headers, AUTH_COOKIE), Some("second"));
    }
}
