//! Authenticated REST client for the identity backend.
//!
//! Every request passes through [`ApiClient::prepare`] before dispatch, which
//! attaches the stored session token and the anti-forgery cookie. There is no
//! retry: each helper performs one request/response cycle and hands the
//! outcome to the caller.
//!
//! ERROR HANDLING
//! ==============
//! Helpers return `Result<_, ApiError>`; whether a failure is shown to the user
//! or swallowed is decided by the caller (see `state::lifecycle`).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::cookies::{CookieSource, DocumentCookies};
use super::transport::{ApiRequest, ApiResponse, BrowserTransport, Transport};
use super::types::{LoginRequest, RegisterRequest, TokenResponse, UserProfile};
use crate::config::{AUTH_HEADER, AUTH_SCHEME, CSRF_COOKIE, CSRF_HEADER, ClientConfig};
use crate::error::ApiError;
use crate::state::session_store::{LocalStorageStore, SessionStore};

pub const CSRF_ENDPOINT: &str = "/api/auth/csrf/";
pub const USER_ENDPOINT: &str = "/auth/user/";
pub const LOGIN_ENDPOINT: &str = "/auth/login/";
pub const REGISTRATION_ENDPOINT: &str = "/auth/registration/";
pub const LOGOUT_ENDPOINT: &str = "/auth/logout/";
pub const ACCOUNT_DELETE_ENDPOINT: &str = "/api/account/delete/";
pub const PROVIDER_LOGIN_ENDPOINT: &str = "/accounts/google/login/";

/// Client wired to the browser: `fetch`, `localStorage`, `document.cookie`.
pub type BrowserClient = ApiClient<BrowserTransport, LocalStorageStore, DocumentCookies>;

#[derive(Clone, Debug)]
pub struct ApiClient<T, S, C> {
    api_base: String,
    transport: T,
    store: S,
    cookies: C,
}

impl BrowserClient {
    pub fn browser(config: &ClientConfig) -> Self {
        Self::new(
            config,
            BrowserTransport,
            LocalStorageStore::new(config.storage_key.clone()),
            DocumentCookies,
        )
    }
}

impl<T, S, C> ApiClient<T, S, C>
where
    T: Transport,
    S: SessionStore,
    C: CookieSource,
{
    pub fn new(config: &ClientConfig, transport: T, store: S, cookies: C) -> Self {
        Self { api_base: config.api_base.clone(), transport, store, cookies }
    }

    /// The session store this client reads credentials from.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Attach credentials to an outgoing request.
    ///
    /// - stored token → `Authorization: Token <token>`
    /// - `csrftoken` cookie → `X-CSRFToken`, unless the caller already set it
    #[must_use]
    pub fn prepare(&self, mut request: ApiRequest) -> ApiRequest {
        if let Some(token) = self.store.get() {
            request.set_header(AUTH_HEADER, format!("{AUTH_SCHEME} {token}"));
        }
        if request.header(CSRF_HEADER).is_none() {
            if let Some(csrf) = self.cookies.cookie(CSRF_COOKIE) {
                request.set_header(CSRF_HEADER, csrf);
            }
        }
        request
    }

    /// Prepare and dispatch one request. Non-2xx statuses become errors.
    ///
    /// # Errors
    ///
    /// Returns the transport error, or `ApiError::Status` for non-2xx replies.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let request = self.prepare(request);
        let url = format!("{}{}", self.api_base, request.path);
        let resp = self.transport.send(&url, &request).await?;
        log::debug!("{} {} -> {}", request.method.as_str(), request.path, resp.status);
        resp.into_success()
    }

    async fn send_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let resp = self.send(request).await?;
        serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Ask the backend to issue the `csrftoken` cookie.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn prime_csrf(&self) -> Result<(), ApiError> {
        self.send(ApiRequest::get(CSRF_ENDPOINT)).await.map(|_| ())
    }

    /// Identity check: the profile of the token's owner.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` (401/403 for a stale token) or a transport
    /// or decode error.
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.send_json(ApiRequest::get(USER_ENDPOINT)).await
    }

    /// Submit email + password credentials.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` with the field-error body on rejection.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<TokenResponse, ApiError> {
        let body = serde_json::to_value(credentials).map_err(|e| ApiError::Request(e.to_string()))?;
        self.send_json(ApiRequest::post(LOGIN_ENDPOINT).json(body)).await
    }

    /// Create an account. The response may omit `key`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` with the field-error body on rejection.
    pub async fn register(&self, registration: &RegisterRequest) -> Result<TokenResponse, ApiError> {
        let body = serde_json::to_value(registration).map_err(|e| ApiError::Request(e.to_string()))?;
        let resp = self.send(ApiRequest::post(REGISTRATION_ENDPOINT).json(body)).await?;
        if resp.body.trim().is_empty() {
            return Ok(TokenResponse::default());
        }
        serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// End the backend session. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send(ApiRequest::post(LOGOUT_ENDPOINT)).await.map(|_| ())
    }

    /// Permanently delete the signed-in account. Expects `204`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` with the backend's explanation on refusal.
    pub async fn delete_account(&self) -> Result<(), ApiError> {
        self.send(ApiRequest::delete(ACCOUNT_DELETE_ENDPOINT)).await.map(|_| ())
    }

    /// Absolute URL that starts the Google provider login.
    pub fn provider_login_url(&self, prompt: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("prompt", prompt)
            .finish();
        format!("{}{PROVIDER_LOGIN_ENDPOINT}?{query}", self.api_base)
    }
}
