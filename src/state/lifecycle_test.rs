use super::*;
use crate::error::ApiError;
use crate::net::api::{ACCOUNT_DELETE_ENDPOINT, LOGOUT_ENDPOINT, USER_ENDPOINT};
use crate::state::auth::SessionState;
use crate::test_support::test_client;

// =============================================================
// Profile fetch
// =============================================================

#[tokio::test]
async fn profile_fetch_returns_profile() {
    let (client, transport, _) = test_client(Some("T"));
    transport.respond(USER_ENDPOINT, 200, r#"{"username": "anne", "email": "anne@example.test"}"#);
    let profile = fetch_profile(&client).await.unwrap();
    assert_eq!(profile.username.as_deref(), Some("anne"));
}

#[tokio::test]
async fn profile_fetch_without_token_skips_network() {
    let (client, transport, _) = test_client(None);
    assert_eq!(fetch_profile(&client).await, None);
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn profile_fetch_failure_degrades_without_clearing_token() {
    let (client, transport, store) = test_client(Some("STALE"));
    transport.respond(USER_ENDPOINT, 401, r#"{"detail": "Invalid token."}"#);
    assert_eq!(fetch_profile(&client).await, None);
    assert_eq!(store.get().as_deref(), Some("STALE"));
}

#[tokio::test]
async fn profile_fetch_with_malformed_body_yields_none() {
    let (client, transport, _) = test_client(Some("T"));
    transport.respond(USER_ENDPOINT, 200, "not json");
    assert_eq!(fetch_profile(&client).await, None);
}

#[test]
fn profile_loader_only_accepts_latest_generation() {
    let mut loader = ProfileLoader::default();
    let first = loader.begin();
    let second = loader.begin();
    assert!(!loader.is_current(first));
    assert!(loader.is_current(second));
    loader.cancel();
    assert!(!loader.is_current(second));
    assert!(!loader.finish(second, Some(UserProfile::default())));
    assert_eq!(loader.status(), &ProfileStatus::Idle);
}

#[tokio::test]
async fn stale_token_profile_failure_shows_signed_out_chrome() {
    let (client, transport, store) = test_client(Some("STALE"));
    transport.respond(USER_ENDPOINT, 401, r#"{"detail": "Invalid token."}"#);
    let session = SessionState::from_store(&store);
    let mut loader = ProfileLoader::default();

    let generation = loader.begin();
    assert_eq!(loader.chrome(session.has_token()), HeaderChrome::SignedIn);
    assert!(loader.finish(generation, fetch_profile(&client).await));

    assert_eq!(loader.status(), &ProfileStatus::Failed);
    assert_eq!(loader.profile(), None);
    assert_eq!(loader.chrome(session.has_token()), HeaderChrome::SignedOut);
    // The token stays for the route guard to judge.
    assert_eq!(store.get().as_deref(), Some("STALE"));
}

#[tokio::test]
async fn loaded_profile_shows_signed_in_chrome() {
    let (client, transport, _) = test_client(Some("T"));
    transport.respond(USER_ENDPOINT, 200, r#"{"username": "anne"}"#);
    let mut loader = ProfileLoader::default();
    let generation = loader.begin();
    assert!(loader.finish(generation, fetch_profile(&client).await));
    assert_eq!(loader.profile().and_then(|p| p.username.as_deref()), Some("anne"));
    assert_eq!(loader.chrome(true), HeaderChrome::SignedIn);
    // Losing the token hides the signed-in chrome regardless of the profile.
    assert_eq!(loader.chrome(false), HeaderChrome::SignedOut);
}

// =============================================================
// Sign out
// =============================================================

#[tokio::test]
async fn sign_out_clears_store_and_targets_login() {
    let (client, transport, store) = test_client(Some("T"));
    transport.respond(LOGOUT_ENDPOINT, 200, "{}");
    assert_eq!(sign_out(&client).await, "/login");
    assert_eq!(store.get(), None);
    assert_eq!(transport.sent_paths(), vec![LOGOUT_ENDPOINT.to_owned()]);
}

#[tokio::test]
async fn sign_out_survives_failing_logout_endpoint() {
    let (client, transport, store) = test_client(Some("T"));
    transport.respond(LOGOUT_ENDPOINT, 500, "<html>boom</html>");
    assert_eq!(sign_out(&client).await, "/login");
    assert_eq!(store.get(), None);
}

#[tokio::test]
async fn sign_out_survives_network_error() {
    let (client, transport, store) = test_client(Some("T"));
    transport.fail(LOGOUT_ENDPOINT, ApiError::Network("offline".to_owned()));
    assert_eq!(sign_out(&client).await, "/login");
    assert_eq!(store.get(), None);
}

// =============================================================
// Account deletion
// =============================================================

#[test]
fn deletion_requires_confirmation() {
    let mut controls = AccountControls::default();
    assert!(!controls.confirm_delete());
    controls.request_delete();
    assert_eq!(controls.delete, DeleteFlow::Confirming);
    controls.cancel_delete();
    assert_eq!(controls.delete, DeleteFlow::Idle);
    controls.request_delete();
    assert!(controls.confirm_delete());
    assert_eq!(controls.delete, DeleteFlow::Pending);
    // A second confirm while pending does not issue another request.
    assert!(!controls.confirm_delete());
}

#[tokio::test]
async fn successful_deletion_clears_store_and_profile() {
    let (client, transport, store) = test_client(Some("T"));
    transport.respond(ACCOUNT_DELETE_ENDPOINT, 204, "");
    let mut session = SessionState::from_store(&store);
    let mut loader = ProfileLoader::default();
    let generation = loader.begin();
    loader.finish(generation, Some(UserProfile { username: Some("anne".to_owned()), ..UserProfile::default() }));

    let outcome = delete_account(&client).await;
    assert_eq!(outcome, DeleteOutcome::Deleted("/"));
    session.refresh_from(client.store());
    loader.cancel();

    assert_eq!(store.get(), None);
    assert_eq!(loader.profile(), None);
    assert!(!session.has_token());
    assert_eq!(loader.chrome(session.has_token()), HeaderChrome::SignedOut);
}

#[tokio::test]
async fn failed_deletion_keeps_store_and_reports_backend_message() {
    let (client, transport, store) = test_client(Some("T"));
    transport.respond(ACCOUNT_DELETE_ENDPOINT, 400, r#"{"detail": "Staff accounts cannot be deleted."}"#);
    let mut controls = AccountControls::default();
    controls.request_delete();
    controls.confirm_delete();

    let outcome = delete_account(&client).await;
    controls.finish_delete(&outcome);

    assert_eq!(store.get().as_deref(), Some("T"));
    assert_eq!(controls.error.as_deref(), Some("Staff accounts cannot be deleted."));
    assert_eq!(controls.delete, DeleteFlow::Idle);
}

#[tokio::test]
async fn failed_deletion_without_body_uses_generic_message() {
    let (client, transport, store) = test_client(Some("T"));
    transport.fail(ACCOUNT_DELETE_ENDPOINT, ApiError::Network("offline".to_owned()));
    let outcome = delete_account(&client).await;
    assert_eq!(outcome, DeleteOutcome::Failed(DELETE_FAILED_MESSAGE.to_owned()));
    assert_eq!(store.get().as_deref(), Some("T"));
}
