//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so overrides are
//! baked in with `option_env!` when the bundle is compiled. The resolved
//! config is provided to the component tree through Leptos context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_STORAGE_KEY: &str = "authToken";
pub const DEFAULT_PROVIDER_PROMPT: &str = "select_account";

/// Cookie set by the backend's anti-forgery endpoint.
pub const CSRF_COOKIE: &str = "csrftoken";
/// Request header echoing the anti-forgery cookie.
pub const CSRF_HEADER: &str = "X-CSRFToken";
/// Credential header and the token-auth scheme the identity backend expects.
pub const AUTH_HEADER: &str = "Authorization";
pub const AUTH_SCHEME: &str = "Token";

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const AUTH_COMPLETE_PATH: &str = "/auth/complete";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Identity backend origin, without a trailing slash.
    pub api_base: String,
    /// `localStorage` key holding the session token.
    pub storage_key: String,
    /// `prompt` value passed to the provider login start endpoint.
    pub provider_prompt: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            provider_prompt: DEFAULT_PROVIDER_PROMPT.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time environment overrides.
    ///
    /// Optional:
    /// - `INJURY_API_BASE`: default `http://localhost:8000`
    /// - `INJURY_STORAGE_KEY`: default `authToken`
    /// - `INJURY_PROVIDER_PROMPT`: default `select_account`
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("INJURY_API_BASE"),
            option_env!("INJURY_STORAGE_KEY"),
            option_env!("INJURY_PROVIDER_PROMPT"),
        )
    }

    fn from_overrides(api_base: Option<&str>, storage_key: Option<&str>, provider_prompt: Option<&str>) -> Self {
        Self {
            api_base: non_empty(api_base)
                .unwrap_or(DEFAULT_API_BASE)
                .trim_end_matches('/')
                .to_owned(),
            storage_key: non_empty(storage_key).unwrap_or(DEFAULT_STORAGE_KEY).to_owned(),
            provider_prompt: non_empty(provider_prompt)
                .unwrap_or(DEFAULT_PROVIDER_PROMPT)
                .to_owned(),
        }
    }

    /// Absolute URL for a backend path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
