// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::gateway::Gateway;
use crate::testutil::{unreachable_url, StubResponse, StubServer};
use rf_core::model::{Gender, Role, User};
use rf_core::{Error, SessionFile};
use tempfile::TempDir;

fn user_body(username: &str) -> String {
    format!(
        r#"{{"id":3,"username":"{username}","name":"Some One","type":"student","gender":"OTHER","token":"tok-3"}}"#
    )
}

fn store_for(base_url: String, dir: &TempDir) -> (SessionStore, SessionCell) {
    let cell = SessionCell::new(SessionFile::new(dir.path().join("session.json")));
    let gateway = Gateway::new(base_url, cell.clone());
    (SessionStore::new(cell.clone(), Users::new(gateway)), cell)
}

fn seeded_user(username: &str) -> User {
    User {
        id: 9,
        username: username.into(),
        display_name: "Seeded".into(),
        role: Role::Teacher,
        bio: String::new(),
        gender: Gender::Female,
        avatar: None,
        followers: 0,
        following: 0,
        token: Some("tok-old".into()),
        created_at: None,
    }
}

#[tokio::test]
async fn login_sets_and_persists_session() {
    let dir = TempDir::new().unwrap();
    let stub = StubServer::start(vec![StubResponse::json(200, user_body("alice"))]).await;
    let (store, cell) = store_for(stub.url(), &dir);

    let user = store.login("alice").await.unwrap();
    assert_eq!(user.username, "alice");
    assert!(store.is_authenticated());

    // Persisted record matches the signed-in identity.
    let on_disk = SessionFile::new(cell.file_path()).load().unwrap();
    assert_eq!(on_disk.username(), "alice");
    assert_eq!(on_disk.token(), Some("tok-3"));
}

#[tokio::test]
async fn login_unknown_user_keeps_signed_out() {
    let dir = TempDir::new().unwrap();
    let stub = StubServer::start(vec![StubResponse::json(404, "{}")]).await;
    let (store, cell) = store_for(stub.url(), &dir);

    let err = store.login("ghost").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert!(!store.is_authenticated());
    assert!(!cell.file_path().exists());
}

#[tokio::test]
async fn login_blank_username_rejected_without_network() {
    let dir = TempDir::new().unwrap();
    let stub = StubServer::start(vec![]).await;
    let (store, _cell) = store_for(stub.url(), &dir);

    let err = store.login("   ").await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(!store.is_authenticated());
    assert_eq!(stub.request_count(), 0);
}

#[tokio::test]
async fn login_transport_failure_keeps_previous_session() {
    let dir = TempDir::new().unwrap();
    let (store, cell) = store_for(unreachable_url().await, &dir);
    cell.set(rf_core::Session::new(seeded_user("bob"))).unwrap();

    let err = store.login("alice").await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(cell.username().as_deref(), Some("bob"));
}

#[tokio::test]
async fn login_miss_keeps_previous_session() {
    let dir = TempDir::new().unwrap();
    let stub = StubServer::start(vec![StubResponse::json(404, "{}")]).await;
    let (store, cell) = store_for(stub.url(), &dir);
    cell.set(rf_core::Session::new(seeded_user("bob"))).unwrap();

    assert!(store.login("ghost").await.is_err());
    assert_eq!(store.current().unwrap().username(), "bob");
}

#[tokio::test]
async fn register_signs_in_as_submitted_username() {
    let dir = TempDir::new().unwrap();
    let stub = StubServer::start(vec![StubResponse::json(201, user_body("carol"))]).await;
    let (store, cell) = store_for(stub.url(), &dir);

    let details = rf_core::NewUser::new("carol", "Carol", Role::Student, Gender::Female);
    let user = store.register(&details).await.unwrap();
    assert_eq!(user.username, "carol");

    let on_disk = SessionFile::new(cell.file_path()).load().unwrap();
    assert_eq!(on_disk.username(), "carol");
}

#[tokio::test]
async fn register_conflict_keeps_signed_out() {
    let dir = TempDir::new().unwrap();
    let stub = StubServer::start(vec![StubResponse::json(409, "{}")]).await;
    let (store, _cell) = store_for(stub.url(), &dir);

    let details = rf_core::NewUser::new("dup", "Dup", Role::Student, Gender::Male);
    let err = store.register(&details).await.unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn check_username_never_mutates_session() {
    let dir = TempDir::new().unwrap();
    let stub = StubServer::start(vec![
        StubResponse::json(200, r#"{"available":false}"#),
        StubResponse::json(200, r#"{"available":true}"#),
    ])
    .await;
    let (store, cell) = store_for(stub.url(), &dir);

    // Signed out before, signed out after.
    assert!(!store.check_username("taken").await.unwrap());
    assert!(!store.is_authenticated());

    // Signed in before, same identity after.
    cell.set(rf_core::Session::new(seeded_user("bob"))).unwrap();
    assert!(store.check_username("newbie").await.unwrap());
    assert_eq!(cell.username().as_deref(), Some("bob"));
}

#[tokio::test]
async fn logout_clears_memory_and_disk_idempotently() {
    let dir = TempDir::new().unwrap();
    let stub = StubServer::start(vec![]).await;
    let (store, cell) = store_for(stub.url(), &dir);
    cell.set(rf_core::Session::new(seeded_user("bob"))).unwrap();

    store.logout();
    assert!(!store.is_authenticated());
    assert!(!cell.file_path().exists());

    // Logging out again changes nothing and does not fail.
    store.logout();
    assert!(!store.is_authenticated());
    assert_eq!(stub.request_count(), 0, "logout is purely local");
}

#[tokio::test]
async fn restore_round_trips_via_disk() {
    let dir = TempDir::new().unwrap();
    let stub = StubServer::start(vec![StubResponse::json(200, user_body("alice"))]).await;
    let (store, _cell) = store_for(stub.url(), &dir);
    store.login("alice").await.unwrap();

    // A second store over the same state directory picks the session up.
    let (fresh, _) = store_for(stub.url(), &dir);
    assert!(!fresh.is_authenticated());
    assert!(fresh.restore());
    assert_eq!(fresh.current().unwrap().username(), "alice");
}

#[tokio::test]
async fn restore_with_corrupt_record_is_signed_out() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json at all").unwrap();
    let stub = StubServer::start(vec![]).await;
    let (store, _cell) = store_for(stub.url(), &dir);

    assert!(!store.restore());
    assert!(!store.is_authenticated());
    assert!(!path.exists(), "corrupt record dropped");
}
