use super::*;

fn profile(first: Option<&str>, last: Option<&str>, username: Option<&str>, email: Option<&str>) -> UserProfile {
    UserProfile {
        username: username.map(str::to_owned),
        email: email.map(str::to_owned),
        first_name: first.map(str::to_owned),
        last_name: last.map(str::to_owned),
        picture: None,
    }
}

// =============================================================
// display_name
// =============================================================

#[test]
fn full_name_wins() {
    let p = profile(Some("Anne"), Some("Bonny"), Some("anne"), Some("anne@example.test"));
    assert_eq!(display_name(&p).as_deref(), Some("Anne Bonny"));
}

#[test]
fn partial_name_is_still_used() {
    let p = profile(Some("Anne"), None, Some("anne"), None);
    assert_eq!(display_name(&p).as_deref(), Some("Anne"));
}

#[test]
fn username_then_email() {
    assert_eq!(display_name(&profile(None, Some(" "), Some("anne"), Some("a@x.test"))).as_deref(), Some("anne"));
    assert_eq!(display_name(&profile(None, None, None, Some("a@x.test"))).as_deref(), Some("a@x.test"));
    assert_eq!(display_name(&UserProfile::default()), None);
}

// =============================================================
// initials / avatar
// =============================================================

#[test]
fn initials_use_first_and_last_words() {
    assert_eq!(initials("Anne Mary Bonny"), "AB");
    assert_eq!(initials("anne bonny"), "AB");
}

#[test]
fn single_word_uses_first_two_characters() {
    assert_eq!(initials("anne"), "AN");
    assert_eq!(initials("a"), "A");
    assert_eq!(initials(""), "");
}

#[test]
fn initials_stay_two_letters_when_uppercase_expands() {
    assert_eq!(initials("ßa"), "SS");
    assert_eq!(initials("ßen ßach"), "SS");
    assert_eq!(initials("ß"), "SS");
}

#[test]
fn avatar_prefers_picture() {
    let mut p = profile(Some("Anne"), Some("Bonny"), None, None);
    p.picture = Some("https://example.test/a.png".to_owned());
    assert_eq!(avatar(&p), Avatar::Image("https://example.test/a.png".to_owned()));
}

#[test]
fn avatar_falls_back_to_initials() {
    let p = profile(None, None, None, Some("x@example.test"));
    assert_eq!(avatar(&p), Avatar::Initials("X@".to_owned()));
}
