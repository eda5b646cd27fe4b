//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionState` is the reactive mirror of the session store provided through
//! context as `RwSignal<SessionState>`. Components that mutate the store call
//! [`SessionState::refresh_from`] right after, so the route guard and header
//! observe the change in the same tick.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session_store::SessionStore;

/// Derived authentication state; never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Checking,
    Authenticated,
}

/// App-wide session mirror. Holds only the token; the profile belongs to
/// the header that fetched it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Token currently held by the session store.
    pub token: Option<String>,
}

impl SessionState {
    pub fn from_store<S: SessionStore>(store: &S) -> Self {
        Self { token: store.get() }
    }

    /// Re-read the token after a store mutation.
    pub fn refresh_from<S: SessionStore>(&mut self, store: &S) {
        self.token = store.get();
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}
