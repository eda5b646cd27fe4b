//! Credential submission for the sign-in and registration pages.
//!
//! A token is written to the store only when the backend returns one; a
//! rejected submission leaves session state untouched and comes back as
//! [`FormErrors`] for inline display.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use crate::config::{LOGIN_PATH, ROOT_PATH};
use crate::net::api::ApiClient;
use crate::net::cookies::CookieSource;
use crate::net::transport::Transport;
use crate::net::types::{FormErrors, LoginRequest, RegisterRequest};
use crate::state::session_store::SessionStore;

pub const LOGIN_FAILED_MESSAGE: &str = "Sign in failed. Check your email and password.";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed. Please try again.";
pub const REGISTERED_WITHOUT_SESSION_MESSAGE: &str = "Account created. Please sign in.";

/// Where to go after a successful submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignInOutcome {
    /// A session was issued and stored.
    SignedIn(&'static str),
    /// The account exists but no session was issued yet.
    SignInRequired(&'static str),
}

impl SignInOutcome {
    pub fn destination(self) -> &'static str {
        match self {
            Self::SignedIn(path) | Self::SignInRequired(path) => path,
        }
    }
}

/// Trim and require both fields.
///
/// # Errors
///
/// Returns per-field errors for blank inputs.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, FormErrors> {
    let mut errors = FormErrors::default();
    let email = email.trim();
    if email.is_empty() {
        errors.fields.insert("email".to_owned(), vec!["Enter your email.".to_owned()]);
    }
    if password.is_empty() {
        errors.fields.insert("password".to_owned(), vec!["Enter your password.".to_owned()]);
    }
    if errors.is_empty() {
        Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
    } else {
        Err(errors)
    }
}

/// Trim and require every field; passwords must match.
///
/// # Errors
///
/// Returns per-field errors for blank or mismatched inputs.
pub fn validate_registration_input(
    username: &str,
    email: &str,
    password1: &str,
    password2: &str,
) -> Result<RegisterRequest, FormErrors> {
    let mut errors = FormErrors::default();
    let username = username.trim();
    let email = email.trim();
    for (field, value, message) in [
        ("username", username, "Choose a username."),
        ("email", email, "Enter your email."),
        ("password1", password1, "Choose a password."),
        ("password2", password2, "Confirm your password."),
    ] {
        if value.is_empty() {
            errors.fields.insert(field.to_owned(), vec![message.to_owned()]);
        }
    }
    if !password1.is_empty() && !password2.is_empty() && password1 != password2 {
        errors
            .fields
            .insert("password2".to_owned(), vec!["Passwords do not match.".to_owned()]);
    }
    if errors.is_empty() {
        Ok(RegisterRequest {
            username: username.to_owned(),
            email: email.to_owned(),
            password1: password1.to_owned(),
            password2: password2.to_owned(),
        })
    } else {
        Err(errors)
    }
}

/// Submit credentials; store the issued token on success.
///
/// # Errors
///
/// Returns the backend's field errors, or a general message when the
/// response carries none or lacks a token.
pub async fn submit_login<T, S, C>(client: &ApiClient<T, S, C>, credentials: &LoginRequest) -> Result<SignInOutcome, FormErrors>
where
    T: Transport,
    S: SessionStore,
    C: CookieSource,
{
    match client.login(credentials).await {
        Ok(resp) => match resp.token() {
            Some(token) => {
                client.store().set(token);
                Ok(SignInOutcome::SignedIn(ROOT_PATH))
            }
            None => {
                log::warn!("login succeeded without a token");
                Err(FormErrors::general(LOGIN_FAILED_MESSAGE))
            }
        },
        Err(e) => {
            log::info!("login rejected: {e}");
            Err(FormErrors::from_body(e.body().unwrap_or_default(), LOGIN_FAILED_MESSAGE))
        }
    }
}

/// Submit a registration; store the token when the backend issues one.
///
/// # Errors
///
/// Returns the backend's field errors, or a general message.
pub async fn submit_registration<T, S, C>(
    client: &ApiClient<T, S, C>,
    registration: &RegisterRequest,
) -> Result<SignInOutcome, FormErrors>
where
    T: Transport,
    S: SessionStore,
    C: CookieSource,
{
    match client.register(registration).await {
        Ok(resp) => match resp.token() {
            Some(token) => {
                client.store().set(token);
                Ok(SignInOutcome::SignedIn(ROOT_PATH))
            }
            None => Ok(SignInOutcome::SignInRequired(LOGIN_PATH)),
        },
        Err(e) => {
            log::info!("registration rejected: {e}");
            Err(FormErrors::from_body(e.body().unwrap_or_default(), REGISTRATION_FAILED_MESSAGE))
        }
    }
}
