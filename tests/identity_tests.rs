// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Identity resolution against a mocked auth service.

use dealscout::models::Role;
use dealscout::store::{SessionKey, SessionStore};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

#[tokio::test]
async fn test_no_token_makes_no_request() {
    let server = MockServer::start().await;
    let (app, _store, _history) = common::create_test_app(&server);

    assert!(app.identity.resolve_identity().await.is_none());
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_success_persists_role_and_id() {
    let server = MockServer::start().await;
    let (app, store, _history) = common::create_test_app(&server);
    common::seed_session(&store);
    common::mock_me(&server, "17", "founder").await;

    let identity = app.identity.resolve_identity().await.expect("identity");

    assert_eq!(identity.id, "17");
    assert_eq!(identity.role, Role::Founder);
    assert_eq!(identity.email, "founder@example.com");
    assert_eq!(store.get(SessionKey::Role).as_deref(), Some("founder"));
    assert_eq!(store.get(SessionKey::UserId).as_deref(), Some("17"));
}

#[tokio::test]
async fn test_numeric_id_and_extra_fields() {
    let server = MockServer::start().await;
    let (app, store, _history) = common::create_test_app(&server);
    common::seed_session(&store);

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 99,
            "email": "x@example.com",
            "role": "admin",
            "company_name": "Acme"
        })))
        .mount(&server)
        .await;

    let identity = app.identity.resolve_identity().await.expect("identity");
    assert_eq!(identity.id, "99");
    assert_eq!(identity.role, Role::Other("admin".to_string()));
    assert_eq!(identity.extra.get("company_name"), Some(&json!("Acme")));
}

#[tokio::test]
async fn test_failures_resolve_to_none() {
    for response in [
        ResponseTemplate::new(401).set_body_json(json!({"detail": "Not authenticated"})),
        ResponseTemplate::new(500),
        ResponseTemplate::new(200).set_body_string("not json"),
    ] {
        let server = MockServer::start().await;
        let (app, store, _history) = common::create_test_app(&server);
        common::seed_session(&store);

        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .respond_with(response)
            .mount(&server)
            .await;

        assert!(app.identity.resolve_identity().await.is_none());
        assert_eq!(store.get(SessionKey::Role), None);
        assert_eq!(store.get(SessionKey::UserId), None);
    }
}
