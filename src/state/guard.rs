//! Route guard state machine.
//!
//! DESIGN
//! ======
//! The guard is driven by discrete events instead of re-deriving auth state on
//! every render:
//!
//! ```text
//! TokenObserved(None)     -> Invalid                       (no network call)
//! TokenObserved(Some(t))  -> Checking, effect IssueCheck{generation}
//! CheckResolved(ok)       -> Valid
//! CheckResolved(failed)   -> Invalid, effect ClearToken
//! Unmounted               -> every later CheckResolved is dropped
//! ```
//!
//! Each issued check carries a generation number. A resolution whose
//! generation is not the latest (token changed meanwhile) or that arrives
//! after unmount is ignored, so a stale response can never overwrite newer
//! state or touch the store.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::LOGIN_PATH;
use crate::net::api::ApiClient;
use crate::net::cookies::CookieSource;
use crate::net::transport::Transport;
use crate::state::auth::AuthState;
use crate::state::session_store::SessionStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardPhase {
    #[default]
    Checking,
    Valid,
    Invalid,
}

impl From<GuardPhase> for AuthState {
    fn from(phase: GuardPhase) -> Self {
        match phase {
            GuardPhase::Checking => Self::Checking,
            GuardPhase::Valid => Self::Authenticated,
            GuardPhase::Invalid => Self::Unauthenticated,
        }
    }
}

/// Result of the backend identity check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    Confirmed,
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardEvent {
    /// The guard mounted or the stored token changed.
    TokenObserved(Option<String>),
    CheckResolved { generation: u64, outcome: CheckOutcome },
    Unmounted,
}

/// Side effect the owner must perform after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardEffect {
    None,
    IssueCheck { generation: u64 },
    ClearToken,
}

/// What the guarded route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    /// Still checking: render nothing, so neither protected content nor a
    /// premature redirect flashes.
    Nothing,
    Redirect(&'static str),
    Protected,
}

#[derive(Clone, Debug)]
pub struct RouteGuard {
    phase: GuardPhase,
    generation: u64,
    observed: Option<Option<String>>,
    mounted: bool,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self { phase: GuardPhase::Checking, generation: 0, observed: None, mounted: true }
    }
}

impl RouteGuard {
    pub fn phase(&self) -> GuardPhase {
        self.phase
    }

    pub fn auth_state(&self) -> AuthState {
        self.phase.into()
    }

    pub fn handle(&mut self, event: GuardEvent) -> GuardEffect {
        if !self.mounted {
            return GuardEffect::None;
        }
        match event {
            GuardEvent::TokenObserved(token) => self.observe(token),
            GuardEvent::CheckResolved { generation, outcome } => self.resolve(generation, outcome),
            GuardEvent::Unmounted => {
                self.mounted = false;
                self.generation += 1;
                GuardEffect::None
            }
        }
    }

    fn observe(&mut self, token: Option<String>) -> GuardEffect {
        if self.observed.as_ref() == Some(&token) {
            return GuardEffect::None;
        }
        self.generation += 1;
        let has_token = token.is_some();
        self.observed = Some(token);
        if has_token {
            self.phase = GuardPhase::Checking;
            GuardEffect::IssueCheck { generation: self.generation }
        } else {
            self.phase = GuardPhase::Invalid;
            GuardEffect::None
        }
    }

    fn resolve(&mut self, generation: u64, outcome: CheckOutcome) -> GuardEffect {
        if generation != self.generation || self.phase != GuardPhase::Checking {
            log::debug!("route guard: dropping stale identity check {generation}");
            return GuardEffect::None;
        }
        match outcome {
            CheckOutcome::Confirmed => {
                self.phase = GuardPhase::Valid;
                GuardEffect::None
            }
            CheckOutcome::Rejected => {
                self.phase = GuardPhase::Invalid;
                GuardEffect::ClearToken
            }
        }
    }

    pub fn view(&self) -> GuardView {
        match self.auth_state() {
            AuthState::Checking => GuardView::Nothing,
            AuthState::Authenticated => GuardView::Protected,
            AuthState::Unauthenticated => GuardView::Redirect(LOGIN_PATH),
        }
    }
}

/// Run the identity check for `generation` and wrap the result as an event.
///
/// Any failure, including network errors, counts as a rejection.
pub async fn check_identity<T, S, C>(client: &ApiClient<T, S, C>, generation: u64) -> GuardEvent
where
    T: Transport,
    S: SessionStore,
    C: CookieSource,
{
    let outcome = match client.current_user().await {
        Ok(_) => CheckOutcome::Confirmed,
        Err(e) if e.is_unauthorized() => {
            log::info!("identity check rejected the stored token: {e}");
            CheckOutcome::Rejected
        }
        Err(e) => {
            log::warn!("identity check failed, treating token as invalid: {e}");
            CheckOutcome::Rejected
        }
    };
    GuardEvent::CheckResolved { generation, outcome }
}

/// Apply a guard effect that touches the store. Returns true if it mutated.
pub fn apply_store_effect<S: SessionStore>(effect: GuardEffect, store: &S) -> bool {
    if effect == GuardEffect::ClearToken {
        store.clear();
        true
    } else {
        false
    }
}
