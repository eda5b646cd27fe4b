//! Protected landing page.
//!
//! Rendered only behind the route guard, so a validated session is held
//! whenever this view exists. The prediction form mounts into the panel.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <h1 class="home-page__title">"Welcome"</h1>
            <p class="home-page__subtitle">
                "Estimate a player's injury risk from recent workload and match history."
            </p>
            <section class="prediction-panel" id="prediction-form"></section>
        </main>
    }
}
