//! Avatar badge: profile picture or initials.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::UserProfile;
use crate::util::display::{Avatar, avatar};

#[component]
pub fn AvatarBadge(profile: UserProfile) -> impl IntoView {
    match avatar(&profile) {
        Avatar::Image(url) => view! { <img class="avatar avatar--image" src=url alt="" referrerpolicy="no-referrer"/> }.into_any(),
        Avatar::Initials(initials) => view! { <span class="avatar avatar--initials" aria-hidden="true">{initials}</span> }.into_any(),
    }
}
