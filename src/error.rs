//! Error types for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every backend helper returns `Result<_, ApiError>`. Callers decide whether a
//! failure is surfaced (account deletion, credential rejection) or swallowed
//! (logout, profile fetch), so this type carries enough of the response to
//! build a human-readable message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request cannot be issued outside a browser build.
    #[error("not available outside the browser")]
    Unavailable,

    /// The request could not be built (bad header or body).
    #[error("request build failed: {0}")]
    Request(String),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("backend responded with status {status}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// Status code for backend rejections, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 401/403: the stored token is stale or revoked.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Response body for backend rejections.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }

    /// Human-readable message derived from the response body, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.body()
            .and_then(message_from_body)
            .unwrap_or_else(|| fallback.to_owned())
    }
}

/// Pull the most useful message out of a JSON error body.
///
/// Looks at `detail`, `error`, `message`, then `non_field_errors[0]`, then the
/// first message of the first field. Plain-text bodies are ignored since they
/// are usually HTML error pages.
pub fn message_from_body(body: &str) -> Option<String> {
    let Value::Object(map) = serde_json::from_str::<Value>(body).ok()? else {
        return None;
    };
    for key in ["detail", "error", "message"] {
        if let Some(text) = map.get(key).and_then(first_text) {
            return Some(text);
        }
    }
    if let Some(text) = map.get("non_field_errors").and_then(first_text) {
        return Some(text);
    }
    map.values().find_map(first_text)
}

/// First non-empty string in a value that is either a string or a list of them.
pub(crate) fn first_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Array(items) => items.iter().find_map(first_text),
        _ => None,
    }
}
