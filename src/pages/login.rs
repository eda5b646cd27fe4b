//! Sign-in page: email + password, or the Google provider redirect.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::config::{ClientConfig, REGISTER_PATH};
use crate::net::api::BrowserClient;
use crate::net::types::FormErrors;
use crate::state::auth::SessionState;
use crate::state::sign_in::{REGISTERED_WITHOUT_SESSION_MESSAGE, submit_login, validate_login_input};

/// Query parameter set by the registration page when no session was issued.
pub const REGISTERED_NOTICE_PARAM: &str = "registered";

/// Sign-in route carrying the "account created" notice.
pub fn login_with_notice(login_path: &str) -> String {
    format!("{login_path}?{REGISTERED_NOTICE_PARAM}=1")
}

/// Inline error for one form field, hidden while there is none.
pub(crate) fn field_error(errors: RwSignal<FormErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors
            .with(|e| e.field(field).map(str::to_owned))
            .map(|message| view! { <p class="form-error" role="alert">{message}</p> })
    }
}

/// Form-wide error, hidden while there is none.
pub(crate) fn general_error(errors: RwSignal<FormErrors>) -> impl IntoView {
    move || {
        errors
            .with(|e| e.general.clone())
            .map(|message| view! { <p class="form-error form-error--general" role="alert">{message}</p> })
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<ClientConfig>();
    let client = BrowserClient::browser(&config);
    let provider_url = client.provider_login_url(&config.provider_prompt);
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);

    let notice = move || query.with(|q| q.get(REGISTERED_NOTICE_PARAM).is_some());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::default());
        busy.set(true);

        let client = client.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match submit_login(&client, &credentials).await {
                Ok(outcome) => {
                    session.update(|s| s.refresh_from(client.store()));
                    navigate(outcome.destination(), NavigateOptions::default());
                }
                Err(e) => {
                    let _ = errors.try_set(e);
                }
            }
            let _ = busy.try_set(false);
        });
    };

    let provider_href = provider_url.clone();
    let on_provider = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if window.location().set_href(&provider_url).is_err() {
                    log::warn!("login: provider navigation failed");
                }
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign In"</h1>
                <p class="login-card__subtitle">"Football Injury Prediction"</p>
                <Show when=notice>
                    <p class="login-message">{REGISTERED_WITHOUT_SESSION_MESSAGE}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        name="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    {field_error(errors, "email")}
                    <input
                        class="login-input"
                        type="password"
                        name="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    {field_error(errors, "password")}
                    {general_error(errors)}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Or"</p>
                <a href=provider_href class="login-button login-button--google" on:click=on_provider>
                    "Continue with Google"
                </a>
                <p class="login-switch">
                    "No account yet? "
                    <A href=REGISTER_PATH>"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
