//! Server-rendered HTML.
//!
//! Pages are assembled with `format!`. Every value that originates from a
//! user or the database goes through [`esc`] (text) or [`attr`] (attribute
//! values) before it is interpolated.

use std::borrow::Cow;

use axum::http::StatusCode;

pub mod admin;
pub mod forms;
pub mod public;

/// Escape text content.
pub(crate) fn esc(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

/// Escape a double-quoted attribute value.
pub(crate) fn attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

/// Which navigation bar a page carries.
#[derive(Debug, Clone, Copy)]
pub enum Nav<'a> {
    Public,
    /// Signed-in administrator, by username.
    Admin(&'a str),
    /// No navigation links (login page).
    Bare,
}

/// Wrap a page body in the shared document shell.
pub fn layout(title: &str, nav: Nav<'_>, body: &str) -> String {
    let nav_html = match nav {
        Nav::Public => r#"<nav>
  <a href="/">Home</a>
  <a href="/planets">Planets</a>
  <a href="/galaxies">Galaxies</a>
  <a class="right" href="/admin">Admin</a>
</nav>"#
            .to_string(),
        Nav::Admin(username) => format!(
            r#"<nav>
  <a href="/admin">Dashboard</a>
  <a href="/admin/planets">Planets</a>
  <a href="/admin/galaxies">Galaxies</a>
  <a href="/admin/users">Users</a>
  <a href="/">View site</a>
  <form class="right" method="POST" action="/admin/logout">
    <span>{username}</span> <button type="submit">Log out</button>
  </form>
</nav>"#,
            username = esc(username),
        ),
        Nav::Bare => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en"><head>
<meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title} - Cosmos</title>
<style>{style}</style>
</head><body>
{nav_html}
<main>
{body}
</main>
</body></html>"#,
        title = esc(title),
        style = BASE_STYLE,
    )
}

/// Banner for `?success=` / `?error=` messages and inline form errors.
pub fn flash(success: Option<&str>, error: Option<&str>) -> String {
    let mut html = String::new();
    if let Some(msg) = success.filter(|m| !m.is_empty()) {
        html.push_str(&format!(r#"<div class="flash success">{}</div>"#, esc(msg)));
    }
    if let Some(msg) = error.filter(|m| !m.is_empty()) {
        html.push_str(&format!(r#"<div class="flash error">{}</div>"#, esc(msg)));
    }
    html
}

/// Standalone page for an error response.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let heading = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        r#"<section class="error-page">
  <h1>{code} {heading}</h1>
  <p>{message}</p>
  <p><a href="/">Back to the catalog</a></p>
</section>"#,
        code = status.as_u16(),
        message = esc(message),
    );
    layout(heading, Nav::Public, &body)
}

/// Render an optional quantity, or a dash when unknown.
pub(crate) fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

pub(crate) fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

const BASE_STYLE: &str = r#"
*{box-sizing:border-box}
body{margin:0;font-family:system-ui,-apple-system,sans-serif;background:#0b0d21;color:#e6e8ff}
nav{display:flex;gap:16px;align-items:center;padding:14px 24px;background:#14173a}
nav a{color:#b9c0ff;text-decoration:none}
nav .right{margin-left:auto}
nav form{display:flex;gap:8px;align-items:center}
main{max-width:1000px;margin:0 auto;padding:24px}
a{color:#8fa2ff}
table{width:100%;border-collapse:collapse;margin-top:16px}
th,td{padding:8px 10px;border-bottom:1px solid #2a2f5e;text-align:left}
.cards{display:flex;gap:16px;flex-wrap:wrap}
.card{flex:1;min-width:180px;background:#14173a;border-radius:10px;padding:18px}
.card .value{font-size:32px;font-weight:700}
.flash{padding:10px 14px;border-radius:8px;margin:12px 0}
.flash.success{background:#123d2a;color:#9ff0c4}
.flash.error{background:#4a1620;color:#ffb3bf}
form.stacked label{display:block;margin-top:12px}
form.stacked input,form.stacked select,form.stacked textarea{width:100%;padding:8px;border-radius:6px;border:1px solid #2a2f5e;background:#0f1230;color:#e6e8ff}
button,.button{display:inline-block;margin-top:16px;padding:8px 16px;border:0;border-radius:6px;background:#5865f2;color:#fff;cursor:pointer;text-decoration:none}
button.danger{background:#d83c3e}
dl{display:grid;grid-template-columns:200px 1fr;gap:6px 16px}
dt{color:#9aa0d0}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_escapes_title() {
        let html = layout("<script>", Nav::Public, "");
        assert!(html.contains("<title>&lt;script&gt; - Cosmos</title>"));
    }

    #[test]
    fn flash_skips_empty_messages() {
        assert_eq!(flash(Some(""), None), "");
        let html = flash(Some("Planet Mars created"), Some("<b>bad</b>"));
        assert!(html.contains("Planet Mars created"));
        assert!(html.contains("&lt;b&gt;bad&lt;/b&gt;"));
    }

    #[test]
    fn error_page_shows_status_and_message() {
        let html = error_page(StatusCode::NOT_FOUND, "Planet with id 9 not found");
        assert!(html.contains("404 Not Found"));
        assert!(html.contains("Planet with id 9 not found"));
    }

    #[test]
    fn admin_nav_escapes_username() {
        let html = layout("Dashboard", Nav::Admin("<root>"), "");
        assert!(html.contains("&lt;root&gt;"));
        assert!(html.contains(r#"action="/admin/logout""#));
    }
}
