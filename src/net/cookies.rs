//! Cookie lookup for the anti-forgery header.
//!
//! The client only reads cookies; the backend sets `csrftoken` when
//! `GET /api/auth/csrf/` is called.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

/// Read-only access to the document's cookies.
pub trait CookieSource {
    fn cookie(&self, name: &str) -> Option<String>;
}

/// Find `name` in a `document.cookie` style string (`a=1; b=2`).
pub fn parse_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Cookies of the current browser document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookies;

impl CookieSource for DocumentCookies {
    fn cookie(&self, name: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let document = web_sys::window()?
                .document()?
                .dyn_into::<web_sys::HtmlDocument>()
                .ok()?;
            let header = document.cookie().ok()?;
            parse_cookie(&header, name)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = name;
            None
        }
    }
}
