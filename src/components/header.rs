//! Always-visible header: brand, profile, sign-out, account deletion.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted above the router outlet on every route. The profile is fetched
//! whenever the observed token changes and published only while the fetch
//! generation is still current. The profile lives in a signal owned by the
//! header, not in app-wide state, so results that land after unmount are
//! dropped. A failed fetch switches the header to the signed-out links and
//! leaves the token for the route guard.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::avatar::AvatarBadge;
use crate::config::{ClientConfig, LOGIN_PATH, REGISTER_PATH, ROOT_PATH};
use crate::net::api::BrowserClient;
use crate::state::auth::SessionState;
use crate::state::lifecycle::{AccountControls, DeleteFlow, DeleteOutcome, HeaderChrome, ProfileLoader};
use crate::util::display::display_name;

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<ClientConfig>();
    let client = StoredValue::new(BrowserClient::browser(&config));
    let navigate = use_navigate();
    let loader = RwSignal::new(ProfileLoader::default());
    let token = Memo::new(move |_| session.with(|s| s.token.clone()));
    // Set by finished actions. Owned here because the controls unmount as
    // soon as the session ends.
    let pending_nav = RwSignal::new(None::<(&'static str, bool)>);

    // Refetch the profile whenever the token changes.
    Effect::new(move || {
        let has_token = token.with(Option::is_some);
        let generation = loader
            .try_update(|l| {
                if has_token {
                    Some(l.begin())
                } else {
                    l.cancel();
                    None
                }
            })
            .flatten();
        let Some(generation) = generation else {
            return;
        };
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            let profile = crate::state::lifecycle::fetch_profile(&client).await;
            let _ = loader.try_update(|l| l.finish(generation, profile));
        });
    });

    let signed_in = move || {
        let has_token = session.with(SessionState::has_token);
        loader.with(|l| l.chrome(has_token)) == HeaderChrome::SignedIn
    };

    Effect::new(move || {
        if let Some((path, replace)) = pending_nav.get() {
            pending_nav.set(None);
            navigate(path, NavigateOptions { replace, ..NavigateOptions::default() });
        }
    });

    view! {
        <header class="top-nav-wrapper">
            <nav class="top-nav">
                <div class="brand">
                    <A href=ROOT_PATH>
                        <span class="brand-icon" aria-hidden="true"></span>
                        "Football Injury Prediction"
                    </A>
                </div>
                <div class="nav-links">
                    <Show
                        when=signed_in
                        fallback=|| view! {
                            <A href=LOGIN_PATH>"Sign In"</A>
                            <A href=REGISTER_PATH>"Sign Up"</A>
                        }
                    >
                        <SessionControls client=client loader=loader pending_nav=pending_nav/>
                    </Show>
                </div>
            </nav>
        </header>
    }
}

/// Profile display plus sign-out and delete-account actions.
#[component]
fn SessionControls(
    client: StoredValue<BrowserClient>,
    loader: RwSignal<ProfileLoader>,
    pending_nav: RwSignal<Option<(&'static str, bool)>>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let controls = RwSignal::new(AccountControls::default());

    let on_sign_out = move |_| {
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            let destination = crate::state::lifecycle::sign_out(&client).await;
            pending_nav.set(Some((destination, false)));
            session.update(|s| s.refresh_from(client.store()));
        });
    };

    let on_delete_request = move |_| controls.update(AccountControls::request_delete);
    let on_delete_cancel = move |_| controls.update(AccountControls::cancel_delete);
    let on_delete_confirm = move |_| {
        if !controls.try_update(AccountControls::confirm_delete).unwrap_or(false) {
            return;
        }
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            let outcome = crate::state::lifecycle::delete_account(&client).await;
            let _ = controls.try_update(|c| c.finish_delete(&outcome));
            if let DeleteOutcome::Deleted(destination) = outcome {
                pending_nav.set(Some((destination, true)));
                session.update(|s| s.refresh_from(client.store()));
            }
        });
    };

    let profile_view = move || {
        loader.with(|l| l.profile().cloned()).map(|profile| {
            let name = display_name(&profile).unwrap_or_default();
            view! {
                <span class="nav-user">
                    <AvatarBadge profile=profile/>
                    <span class="nav-user__name">{name}</span>
                </span>
            }
        })
    };

    let delete_view = move || match controls.with(|c| c.delete) {
        DeleteFlow::Idle => view! {
            <button class="delete-account-btn" on:click=on_delete_request>"Delete account"</button>
        }
        .into_any(),
        DeleteFlow::Confirming => view! {
            <span class="delete-account-confirm" role="alertdialog">
                "Delete your account permanently?"
                <button class="delete-account-btn delete-account-btn--danger" on:click=on_delete_confirm>
                    "Delete"
                </button>
                <button class="delete-account-btn" on:click=on_delete_cancel>"Cancel"</button>
            </span>
        }
        .into_any(),
        DeleteFlow::Pending => view! {
            <span class="delete-account-confirm">"Deleting account..."</span>
        }
        .into_any(),
    };

    view! {
        {profile_view}
        <button class="signout-btn" on:click=on_sign_out>"Sign Out"</button>
        {delete_view}
        <Show when=move || controls.with(|c| c.error.is_some())>
            <p class="nav-error" role="alert">{move || controls.with(|c| c.error.clone().unwrap_or_default())}</p>
        </Show>
    }
}
