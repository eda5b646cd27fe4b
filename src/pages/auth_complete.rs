//! Provider callback landing route.
//!
//! The backend finishes the Google flow by redirecting here with the session
//! token in the fragment or query. The extractor has usually run already at
//! application start; running it again is harmless because the parameters
//! were stripped from the address bar.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::config::ClientConfig;
use crate::state::auth::SessionState;
use crate::state::session_store::LocalStorageStore;
use crate::util::redirect_token::capture_from_browser;

#[component]
pub fn AuthCompletePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<ClientConfig>();
    let store = LocalStorageStore::new(config.storage_key.clone());

    let outcome = capture_from_browser(&store);
    if outcome.captured.is_some() {
        session.update(|s| s.refresh_from(&store));
    }

    view! {
        <p class="auth-complete">"Signing you in..."</p>
        <Redirect path=outcome.destination options=NavigateOptions { replace: true, ..NavigateOptions::default() }/>
    }
}
