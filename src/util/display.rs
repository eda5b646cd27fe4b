//! Display name and avatar derivation for the header.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use crate::net::types::UserProfile;

/// What the avatar slot should render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Avatar {
    Image(String),
    Initials(String),
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// `first_name last_name`, else `username`, else `email`.
pub fn display_name(profile: &UserProfile) -> Option<String> {
    let full = [present(profile.first_name.as_ref()), present(profile.last_name.as_ref())]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    if !full.is_empty() {
        return Some(full);
    }
    present(profile.username.as_ref())
        .or_else(|| present(profile.email.as_ref()))
        .map(str::to_owned)
}

/// Two-letter initials: first letters of the first and last words, or the
/// first two characters of a single word.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let raw: String = match words.as_slice() {
        [] => String::new(),
        [single] => single.chars().take(2).collect(),
        [first, .., last] => first.chars().take(1).chain(last.chars().take(1)).collect(),
    };
    raw.to_uppercase().chars().take(2).collect()
}

/// Picture URL when the profile has one, else initials of the display name.
pub fn avatar(profile: &UserProfile) -> Avatar {
    if let Some(url) = present(profile.picture.as_ref()) {
        return Avatar::Image(url.to_owned());
    }
    let name = display_name(profile).unwrap_or_default();
    Avatar::Initials(initials(&name))
}
