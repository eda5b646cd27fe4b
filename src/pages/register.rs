//! Registration page.
//!
//! When the backend creates the account but issues no session, the store is
//! left empty and the user is sent to sign in with a notice.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::{ClientConfig, LOGIN_PATH};
use crate::net::api::BrowserClient;
use crate::net::types::FormErrors;
use crate::pages::login::{field_error, general_error, login_with_notice};
use crate::state::auth::SessionState;
use crate::state::sign_in::{SignInOutcome, submit_registration, validate_registration_input};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<ClientConfig>();
    let client = BrowserClient::browser(&config);
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password1 = RwSignal::new(String::new());
    let password2 = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let registration =
            match validate_registration_input(&username.get(), &email.get(), &password1.get(), &password2.get()) {
                Ok(registration) => registration,
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
            match submit_registration(&client, &registration).await {
                Ok(SignInOutcome::SignedIn(path)) => {
                    session.update(|s| s.refresh_from(client.store()));
                    navigate(path, NavigateOptions::default());
                }
                Ok(SignInOutcome::SignInRequired(path)) => {
                    navigate(&login_with_notice(path), NavigateOptions::default());
                }
                Err(e) => {
                    let _ = errors.try_set(e);
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create Account"</h1>
                <p class="login-card__subtitle">"Football Injury Prediction"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        name="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    {field_error(errors, "username")}
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
                        name="password1"
                        placeholder="Password"
                        prop:value=move || password1.get()
                        on:input=move |ev| password1.set(event_target_value(&ev))
                    />
                    {field_error(errors, "password1")}
                    <input
                        class="login-input"
                        type="password"
                        name="password2"
                        placeholder="Confirm password"
                        prop:value=move || password2.get()
                        on:input=move |ev| password2.set(event_target_value(&ev))
                    />
                    {field_error(errors, "password2")}
                    {general_error(errors)}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="login-switch">
                    "Already registered? "
                    <A href=LOGIN_PATH>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
