// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Auth context lifecycle tests.

use dealscout::models::{Identity, Role};
use dealscout::services::AuthContext;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

#[tokio::test]
async fn test_starts_loading() {
    let auth = AuthContext::new();
    let state = auth.snapshot();
    assert!(state.is_loading);
    assert!(state.user.is_none());
    assert!(!auth.is_mounted());
}

#[tokio::test]
async fn test_mount_resolves_exactly_once() {
    let server = MockServer::start().await;
    let (app, store, _history) = common::create_test_app(&server);
    common::seed_session(&store);

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": "5",
            "email": "inv@example.com",
            "role": "investor"
        })))
        .expect(1)
        .mount(&server)
        .await;

    app.mount().await;
    app.mount().await;
    tokio::join!(app.mount(), app.mount());

    let state = app.auth.snapshot();
    assert!(!state.is_loading);
    assert_eq!(state.user.map(|u| u.id), Some("5".to_string()));
    assert!(app.auth.is_mounted());
}

#[tokio::test]
async fn test_mount_without_session_finishes_loading() {
    let server = MockServer::start().await;
    let (app, _store, _history) = common::create_test_app(&server);

    app.mount().await;

    let state = app.auth.snapshot();
    assert!(!state.is_loading);
    assert!(state.user.is_none());
}

#[tokio::test]
async fn test_subscribers_see_loaded_state() {
    let server = MockServer::start().await;
    let (app, store, _history) = common::create_test_app(&server);
    common::seed_session(&store);
    common::mock_me(&server, "8", "investor").await;

    let mut rx = app.auth.subscribe();
    assert!(rx.borrow_and_update().is_loading);

    app.mount().await;

    rx.changed().await.unwrap();
    let state = rx.borrow_and_update().clone();
    assert!(!state.is_loading);
    assert_eq!(state.user.map(|u| u.role), Some(Role::Investor));
}

#[tokio::test]
async fn test_set_user_and_teardown() {
    let auth = AuthContext::new();
    auth.set_user(Some(Identity::new("1", "a@b.co", Role::Founder)));

    // Publishing a user does not end loading by itself
    let state = auth.snapshot();
    assert!(state.is_loading);
    assert!(state.trusted_user().is_none());

    auth.teardown();
    assert!(auth.snapshot().user.is_none());
}
