//! Session token capture from a provider redirect URL.
//!
//! SYSTEM CONTEXT
//! ==============
//! After a provider login the backend redirects to the SPA with the token in
//! the URL fragment (`/#token=...`), or in the query string for older
//! callbacks. This module finds it, persists it through the session store, and
//! produces the URL to show once the token parameters are stripped. The
//! browser glue at the bottom applies the rewrite with `history.replaceState`
//! so no history entry or network navigation is created.
//!
//! Capture is idempotent: a URL without token parameters leaves the store
//! untouched, and malformed input is parsed leniently rather than rejected.

#[cfg(test)]
#[path = "redirect_token_test.rs"]
mod redirect_token_test;

use crate::config::ROOT_PATH;
use crate::state::session_store::SessionStore;

/// Parameter names that may carry the token, in lookup order.
const TOKEN_PARAMS: [&str; 2] = ["token", "key"];

/// The URL component a token was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Carrier {
    Fragment,
    Query,
}

/// The parts of the current location the extractor reads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InboundUrl {
    pub path: String,
    /// Query string without the leading `?`.
    pub query: String,
    /// Fragment without the leading `#`.
    pub fragment: String,
}

impl InboundUrl {
    /// Build from `location.pathname`, `location.search`, `location.hash`.
    pub fn from_parts(path: &str, search: &str, hash: &str) -> Self {
        Self {
            path: if path.is_empty() { ROOT_PATH.to_owned() } else { path.to_owned() },
            query: search.strip_prefix('?').unwrap_or(search).to_owned(),
            fragment: hash.strip_prefix('#').unwrap_or(hash).to_owned(),
        }
    }

    /// Path-relative URL: `path[?query][#fragment]`.
    pub fn href(&self) -> String {
        let mut out = self.path.clone();
        if !self.query.is_empty() {
            out.push('?');
            out.push_str(&self.query);
        }
        if !self.fragment.is_empty() {
            out.push('#');
            out.push_str(&self.fragment);
        }
        out
    }
}

/// A token located in an inbound URL, with the URL to display afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Capture {
    pub token: String,
    pub carrier: Carrier,
    pub stripped: InboundUrl,
}

/// Result of one extractor run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootstrapOutcome {
    /// Where the token came from, when one was captured.
    pub captured: Option<Carrier>,
    /// URL to put in the address bar in place, when a rewrite is needed.
    pub replace_url: Option<String>,
    /// Route to transfer control to afterwards.
    pub destination: &'static str,
}

/// Locate a token: fragment first, then query; `token` before `key` in each.
pub fn find_token(url: &InboundUrl) -> Option<Capture> {
    if let Some(token) = lookup(&url.fragment) {
        let stripped = InboundUrl { fragment: strip_params(&url.fragment), ..url.clone() };
        return Some(Capture { token, carrier: Carrier::Fragment, stripped });
    }
    let token = lookup(&url.query)?;
    let stripped = InboundUrl { query: strip_params(&url.query), ..url.clone() };
    Some(Capture { token, carrier: Carrier::Query, stripped })
}

/// Capture a token from `url` into `store`.
///
/// The store is written once, before the rewrite is reported, so any reader
/// that runs after this call sees the new token.
pub fn capture<S: SessionStore>(url: &InboundUrl, store: &S) -> BootstrapOutcome {
    match find_token(url) {
        Some(capture) => {
            store.set(&capture.token);
            log::info!("session token captured from {:?}", capture.carrier);
            BootstrapOutcome {
                captured: Some(capture.carrier),
                replace_url: Some(capture.stripped.href()),
                destination: ROOT_PATH,
            }
        }
        None => BootstrapOutcome { captured: None, replace_url: None, destination: ROOT_PATH },
    }
}

fn lookup(params: &str) -> Option<String> {
    if params.is_empty() {
        return None;
    }
    TOKEN_PARAMS.iter().find_map(|name| {
        url::form_urlencoded::parse(params.as_bytes())
            .find(|(k, v)| k == name && !v.is_empty())
            .map(|(_, v)| v.into_owned())
    })
}

fn strip_params(params: &str) -> String {
    let kept = url::form_urlencoded::parse(params.as_bytes())
        .filter(|(k, _)| !TOKEN_PARAMS.iter().any(|name| k == name));
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(kept)
        .finish()
}

/// Read the browser's current location.
pub fn current_location() -> Option<InboundUrl> {
    #[cfg(feature = "csr")]
    {
        let location = web_sys::window()?.location();
        Some(InboundUrl::from_parts(
            &location.pathname().ok()?,
            &location.search().unwrap_or_default(),
            &location.hash().unwrap_or_default(),
        ))
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Rewrite the visible URL without navigating or adding a history entry.
pub fn replace_visible_url(url: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        if history
            .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url))
            .is_err()
        {
            log::warn!("failed to strip token parameters from the address bar");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}

/// Run the extractor against the live location and apply the URL rewrite.
pub fn capture_from_browser<S: SessionStore>(store: &S) -> BootstrapOutcome {
    let Some(url) = current_location() else {
        return BootstrapOutcome { captured: None, replace_url: None, destination: ROOT_PATH };
    };
    let outcome = capture(&url, store);
    if let Some(replace) = &outcome.replace_url {
        replace_visible_url(replace);
    }
    outcome
}
