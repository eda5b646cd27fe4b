//! Route guard component wrapping protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Feeds the observed session token into [`RouteGuard`] and runs identity
//! checks as local tasks. The guard lives in a signal owned by this component;
//! once the component unmounts the signal is disposed, so a late check result
//! finds nothing to update and is dropped along with its store effect.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::config::ClientConfig;
use crate::net::api::BrowserClient;
use crate::state::auth::SessionState;
use crate::state::guard::{GuardEffect, GuardEvent, GuardView, RouteGuard};

/// Renders `children` only once the stored token passes the identity check.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<ClientConfig>();
    let client = BrowserClient::browser(&config);
    let guard = RwSignal::new(RouteGuard::default());
    let token = Memo::new(move |_| session.with(|s| s.token.clone()));

    Effect::new(move || {
        let observed = token.get();
        let Some(effect) = guard.try_update(|g| g.handle(GuardEvent::TokenObserved(observed))) else {
            return;
        };
        let GuardEffect::IssueCheck { generation } = effect else {
            return;
        };
        let client = client.clone();
        leptos::task::spawn_local(async move {
            let event = crate::state::guard::check_identity(&client, generation).await;
            let Some(effect) = guard.try_update(|g| g.handle(event)) else {
                log::debug!("guard: dropped identity check {generation} after unmount");
                return;
            };
            if crate::state::guard::apply_store_effect(effect, client.store()) {
                let _ = session.try_update(|s| s.refresh_from(client.store()));
            }
        });
    });

    on_cleanup(move || {
        let _ = guard.try_update(|g| g.handle(GuardEvent::Unmounted));
    });

    move || match guard.with(RouteGuard::view) {
        GuardView::Nothing => ().into_any(),
        GuardView::Redirect(path) => view! {
            <Redirect path=path options=NavigateOptions { replace: true, ..NavigateOptions::default() }/>
        }
        .into_any(),
        GuardView::Protected => children().into_any(),
    }
}
