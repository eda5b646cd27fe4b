//! Session lifecycle controller behind the header chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header is mounted on every route. It fetches the profile for display
//! and owns the two actions that end a session: sign-out and account
//! deletion. Both must leave the session store and the rendered chrome in
//! agreement.
//!
//! ERROR HANDLING
//! ==============
//! - profile fetch failure: show the signed-out affordances; the token is left
//!   for the route guard to judge
//! - logout failure: logged and swallowed; local sign-out always completes
//! - deletion failure: surfaced with a message; nothing is cleared locally

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use crate::config::{LOGIN_PATH, ROOT_PATH};
use crate::net::api::ApiClient;
use crate::net::cookies::CookieSource;
use crate::net::transport::Transport;
use crate::net::types::UserProfile;
use crate::state::session_store::SessionStore;

pub const DELETE_FAILED_MESSAGE: &str = "Could not delete your account. Please try again.";

/// Where the header's profile fetch stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProfileStatus {
    /// No token, nothing to fetch.
    #[default]
    Idle,
    Loading,
    Loaded(UserProfile),
    /// The fetch failed; the token may be stale.
    Failed,
}

/// Which affordances the header shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderChrome {
    SignedOut,
    SignedIn,
}

/// Profile fetch state owned by the header. Only the latest fetch may
/// publish its result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileLoader {
    generation: u64,
    status: ProfileStatus,
}

impl ProfileLoader {
    /// Start a new fetch, invalidating any in flight.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.status = ProfileStatus::Loading;
        self.generation
    }

    /// Invalidate in-flight fetches and forget the profile.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.status = ProfileStatus::Idle;
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Record a fetch result. Returns false when `generation` was superseded.
    pub fn finish(&mut self, generation: u64, profile: Option<UserProfile>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.status = match profile {
            Some(profile) => ProfileStatus::Loaded(profile),
            None => ProfileStatus::Failed,
        };
        true
    }

    pub fn status(&self) -> &ProfileStatus {
        &self.status
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match &self.status {
            ProfileStatus::Loaded(profile) => Some(profile),
            _ => None,
        }
    }

    /// Signed-in chrome needs a token whose profile fetch has not failed.
    pub fn chrome(&self, has_token: bool) -> HeaderChrome {
        if has_token && self.status != ProfileStatus::Failed {
            HeaderChrome::SignedIn
        } else {
            HeaderChrome::SignedOut
        }
    }
}

/// Fetch the profile for display. Any failure yields `None`.
pub async fn fetch_profile<T, S, C>(client: &ApiClient<T, S, C>) -> Option<UserProfile>
where
    T: Transport,
    S: SessionStore,
    C: CookieSource,
{
    if !client.store().has_token() {
        return None;
    }
    match client.current_user().await {
        Ok(profile) => Some(profile),
        Err(e) if e.is_unauthorized() => {
            log::info!("profile fetch rejected, token looks stale: {e}");
            None
        }
        Err(e) => {
            log::warn!("profile fetch failed: {e}");
            None
        }
    }
}

/// Sign out: best-effort backend logout, then always clear the store.
///
/// Returns the route to navigate to.
pub async fn sign_out<T, S, C>(client: &ApiClient<T, S, C>) -> &'static str
where
    T: Transport,
    S: SessionStore,
    C: CookieSource,
{
    if let Err(e) = client.logout().await {
        log::warn!("backend logout failed, signing out locally: {e}");
    }
    client.store().clear();
    LOGIN_PATH
}

/// Two-step account deletion flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeleteFlow {
    #[default]
    Idle,
    /// Waiting for the user to confirm.
    Confirming,
    /// Deletion request in flight.
    Pending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Backend confirmed; store cleared. Navigate to the contained route.
    Deleted(&'static str),
    /// Backend refused or was unreachable; store untouched.
    Failed(String),
}

/// Header-local state for the deletion flow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountControls {
    pub delete: DeleteFlow,
    pub error: Option<String>,
}

impl AccountControls {
    /// Ask for confirmation. Ignored while a deletion is in flight.
    pub fn request_delete(&mut self) {
        if self.delete == DeleteFlow::Idle {
            self.delete = DeleteFlow::Confirming;
            self.error = None;
        }
    }

    pub fn cancel_delete(&mut self) {
        if self.delete == DeleteFlow::Confirming {
            self.delete = DeleteFlow::Idle;
        }
    }

    /// Confirm deletion. Returns true when the request should be issued.
    pub fn confirm_delete(&mut self) -> bool {
        if self.delete == DeleteFlow::Confirming {
            self.delete = DeleteFlow::Pending;
            true
        } else {
            false
        }
    }

    pub fn finish_delete(&mut self, outcome: &DeleteOutcome) {
        self.delete = DeleteFlow::Idle;
        self.error = match outcome {
            DeleteOutcome::Deleted(_) => None,
            DeleteOutcome::Failed(message) => Some(message.clone()),
        };
    }
}

/// Issue the deletion request. Only a confirmed success clears the store.
pub async fn delete_account<T, S, C>(client: &ApiClient<T, S, C>) -> DeleteOutcome
where
    T: Transport,
    S: SessionStore,
    C: CookieSource,
{
    match client.delete_account().await {
        Ok(()) => {
            client.store().clear();
            log::info!("account deleted");
            DeleteOutcome::Deleted(ROOT_PATH)
        }
        Err(e) => {
            log::warn!("account deletion failed: {e}");
            DeleteOutcome::Failed(e.user_message(DELETE_FAILED_MESSAGE))
        }
    }
}
