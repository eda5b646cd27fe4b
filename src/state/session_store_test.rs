use super::*;
use crate::test_support::MemoryStore;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::default();
    assert_eq!(store.get(), None);
    assert!(!store.has_token());
}

#[test]
fn set_overwrites_previous_token() {
    let store = MemoryStore::default();
    store.set("first");
    store.set("second");
    assert_eq!(store.get(), Some("second".to_owned()));
}

#[test]
fn clear_removes_token_and_is_repeatable() {
    let store = MemoryStore::with_token("T");
    store.clear();
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn clones_share_one_slot() {
    let store = MemoryStore::default();
    let other = store.clone();
    store.set("shared");
    assert_eq!(other.get(), Some("shared".to_owned()));
}
