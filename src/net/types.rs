//! Wire DTOs for the identity backend.
//!
//! DESIGN
//! ======
//! The profile payload is loosely shaped on the backend side (provider
//! accounts may lack names or pictures), so every display field is optional
//! and missing keys deserialize to `None` instead of failing the fetch.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::first_text;

/// The signed-in user as returned by `GET /auth/user/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Avatar image URL, if the provider supplied one.
    #[serde(default)]
    pub picture: Option<String>,
}

/// Body for `POST /auth/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/registration/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password1: String,
    pub password2: String,
}

/// Login/registration response. Registration may omit `key` when the backend
/// requires a further step before issuing a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub key: Option<String>,
}

impl TokenResponse {
    /// The issued token, ignoring blank values.
    pub fn token(&self) -> Option<&str> {
        self.key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }
}

/// Credential rejection details, split into general and per-field messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub general: Option<String>,
    pub fields: BTreeMap<String, Vec<String>>,
}

impl FormErrors {
    pub fn general(message: impl Into<String>) -> Self {
        Self { general: Some(message.into()), fields: BTreeMap::new() }
    }

    /// Parse a field-error body such as
    /// `{"email": ["Enter a valid email address."], "non_field_errors": [..]}`.
    ///
    /// Falls back to `fallback` as the general message when the body carries
    /// nothing usable.
    pub fn from_body(body: &str, fallback: &str) -> Self {
        let mut errors = Self::default();
        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
            for (key, value) in map {
                match key.as_str() {
                    "non_field_errors" | "detail" | "error" | "message" => {
                        if errors.general.is_none() {
                            errors.general = first_text(&value);
                        }
                    }
                    _ => {
                        let messages = field_messages(&value);
                        if !messages.is_empty() {
                            errors.fields.insert(key, messages);
                        }
                    }
                }
            }
        }
        if errors.is_empty() {
            errors.general = Some(fallback.to_owned());
        }
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.general.is_none() && self.fields.is_empty()
    }

    /// First message for `field`, if any.
    pub fn field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(|m| m.first()).map(String::as_str)
    }
}

fn field_messages(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_owned))
            .collect(),
        _ => Vec::new(),
    }
}
