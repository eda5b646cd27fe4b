use super::*;
use crate::test_support::MemoryStore;

fn url(path: &str, search: &str, hash: &str) -> InboundUrl {
    InboundUrl::from_parts(path, search, hash)
}

// =============================================================
// Lookup order
// =============================================================

#[test]
fn fragment_token_is_captured_and_fragment_emptied() {
    let store = MemoryStore::default();
    let outcome = capture(&url("/", "", "#token=T"), &store);
    assert_eq!(store.get(), Some("T".to_owned()));
    assert_eq!(outcome.captured, Some(Carrier::Fragment));
    assert_eq!(outcome.replace_url.as_deref(), Some("/"));
    assert_eq!(outcome.destination, "/");
}

#[test]
fn query_key_is_captured_when_no_fragment() {
    let store = MemoryStore::default();
    let outcome = capture(&url("/", "?key=T", ""), &store);
    assert_eq!(store.get(), Some("T".to_owned()));
    assert_eq!(outcome.captured, Some(Carrier::Query));
    assert_eq!(outcome.replace_url.as_deref(), Some("/"));
    assert_eq!(outcome.destination, "/");
}

#[test]
fn fragment_takes_precedence_over_query() {
    let store = MemoryStore::default();
    let outcome = capture(&url("/", "?token=FROM_QUERY", "#token=FROM_HASH"), &store);
    assert_eq!(store.get(), Some("FROM_HASH".to_owned()));
    // Only the carrying component is rewritten.
    assert_eq!(outcome.replace_url.as_deref(), Some("/?token=FROM_QUERY"));
}

#[test]
fn token_param_beats_key_param() {
    let capture = find_token(&url("/", "", "#key=K&token=T")).unwrap();
    assert_eq!(capture.token, "T");
    assert_eq!(capture.stripped.fragment, "");
}

#[test]
fn fragment_without_token_falls_back_to_query() {
    let capture = find_token(&url("/auth/complete", "?key=Q&next=home", "#section=top")).unwrap();
    assert_eq!(capture.carrier, Carrier::Query);
    assert_eq!(capture.token, "Q");
    assert_eq!(capture.stripped.href(), "/auth/complete?next=home#section=top");
}

#[test]
fn unrelated_params_survive_stripping() {
    let capture = find_token(&url("/", "", "#state=abc&token=T&x=1")).unwrap();
    assert_eq!(capture.stripped.fragment, "state=abc&x=1");
}

#[test]
fn encoded_token_is_decoded() {
    let capture = find_token(&url("/", "", "#token=a%2Bb%3D")).unwrap();
    assert_eq!(capture.token, "a+b=");
}

// =============================================================
// Absence and idempotence
// =============================================================

#[test]
fn empty_values_count_as_absent() {
    assert_eq!(find_token(&url("/", "?token=", "#key=")), None);
    let capture = find_token(&url("/", "", "#token=&key=K")).unwrap();
    assert_eq!(capture.token, "K");
}

#[test]
fn no_token_leaves_store_untouched_and_still_targets_root() {
    let store = MemoryStore::with_token("EXISTING");
    let outcome = capture(&url("/login", "?next=/", ""), &store);
    assert_eq!(store.get(), Some("EXISTING".to_owned()));
    assert_eq!(outcome.captured, None);
    assert_eq!(outcome.replace_url, None);
    assert_eq!(outcome.destination, "/");
}

#[test]
fn malformed_components_do_not_panic() {
    let store = MemoryStore::default();
    for (search, hash) in [("?%%%", "#%zz"), ("?=&&=", "#&"), ("?", "#"), ("?token", "#key")] {
        let outcome = capture(&url("/", search, hash), &store);
        assert_eq!(outcome.captured, None);
    }
    assert_eq!(store.get(), None);
}

#[test]
fn second_run_on_stripped_url_is_a_no_op() {
    let store = MemoryStore::default();
    let first = capture(&url("/", "", "#token=ONCE"), &store);
    let stripped = first.replace_url.unwrap();
    let (path, hash) = stripped.split_once('#').unwrap_or((stripped.as_str(), ""));
    store.set("ROTATED");
    let second = capture(&url(path, "", hash), &store);
    assert_eq!(second.captured, None);
    assert_eq!(store.get(), Some("ROTATED".to_owned()));
}

#[test]
fn href_renders_only_present_components() {
    assert_eq!(url("/a", "", "").href(), "/a");
    assert_eq!(url("/a", "?b=1", "").href(), "/a?b=1");
    assert_eq!(url("", "", "#c").href(), "/#c");
}

