//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Start-up order matters: the redirect token extractor runs synchronously
//! before the session state is read from the store and before the router
//! renders, so no route ever observes the pre-capture store.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{NavigateOptions, StaticSegment};

use crate::components::header::Header;
use crate::components::protected_route::ProtectedRoute;
use crate::config::{ClientConfig, ROOT_PATH};
use crate::net::api::BrowserClient;
use crate::pages::{auth_complete::AuthCompletePage, home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::auth::SessionState;
use crate::state::session_store::LocalStorageStore;
use crate::util::redirect_token::{BootstrapOutcome, capture_from_browser};

/// Root application component.
///
/// Captures any redirect token, provides the session and config contexts,
/// primes the anti-forgery cookie, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let store = LocalStorageStore::new(config.storage_key.clone());
    let bootstrap = capture_from_browser(&store);
    let session = RwSignal::new(SessionState::from_store(&store));

    provide_context(config.clone());
    provide_context(session);

    let client = BrowserClient::browser(&config);
    Effect::new(move || {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = client.prime_csrf().await {
                log::warn!("csrf priming failed: {e}");
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/injury-client.css"/>
        <Title text="Football Injury Prediction"/>

        <Router>
            <BootstrapRedirect bootstrap=bootstrap/>
            <Header/>
            <Routes fallback=|| view! { <Redirect path=ROOT_PATH/> }>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <ProtectedRoute><HomePage/></ProtectedRoute> }
                />
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("complete")) view=AuthCompletePage/>
            </Routes>
        </Router>
    }
}

/// Moves to the root once after start-up when a token was captured.
#[component]
fn BootstrapRedirect(bootstrap: BootstrapOutcome) -> impl IntoView {
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move || {
        if bootstrap.captured.is_none() {
            return;
        }
        if location.pathname.get_untracked() != bootstrap.destination {
            navigate(bootstrap.destination, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
