//! Embedded static pages.

use crate::error::ApiError;
use axum::http::{Method, Uri, header};
use axum::response::{IntoResponse, Response};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

/// Resolve a request path to an embedded file name.
///
/// `/` maps to `index.html` and an extensionless path falls back to its
/// `.html` sibling, so `/login` serves `login.html`.
pub fn resolve(path: &str) -> Option<String> {
    let path = path.trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };

    if Assets::get(path).is_some() {
        return Some(path.to_string());
    }

    if !path.contains('.') {
        let html = format!("{}.html", path);
        if Assets::get(&html).is_some() {
            return Some(html);
        }
    }

    None
}

/// Fallback handler serving the embedded pages for GET and HEAD.
pub async fn static_asset(method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return ApiError::NotFound("Not found".to_string()).into_response();
    }

    let Some(name) = resolve(uri.path()) else {
        return ApiError::NotFound("Not found".to_string()).into_response();
    };

    match Assets::get(&name) {
        Some(file) => {
            let mime = mime_guess::from_path(&name).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                file.data.into_owned(),
            )
                .into_response()
        }
        None => ApiError::NotFound("Not found".to_string()).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(resolve("/").as_deref(), Some("index.html"));
        assert_eq!(resolve("/login").as_deref(), Some("login.html"));
        assert_eq!(resolve("/login.html").as_deref(), Some("login.html"));
        assert_eq!(resolve("/users.json"), None);
        assert_eq!(resolve("/missing"), None);
    }
}
