// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use dealscout::config::Config;
use dealscout::routes::MemoryHistory;
use dealscout::store::{MemorySessionStore, SessionKey, SessionStore};
use dealscout::App;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCESS_TOKEN: &str = "test-access-token";
pub const REFRESH_TOKEN: &str = "test-refresh-token";

/// Create a test app talking to `server`, with in-memory session and history.
/// Returns the app plus handles to its store and navigator.
#[allow(dead_code)]
pub fn create_test_app(
    server: &MockServer,
) -> (Arc<App>, Arc<MemorySessionStore>, Arc<MemoryHistory>) {
    let store = Arc::new(MemorySessionStore::new());
    let history = Arc::new(MemoryHistory::new());
    let app = App::new(
        Config::test_default(&server.uri()),
        store.clone(),
        history.clone(),
    )
    .expect("Failed to build test app");

    (Arc::new(app), store, history)
}

/// Store a full credential pair, as after a previous sign-in.
#[allow(dead_code)]
pub fn seed_session(store: &MemorySessionStore) {
    store.set(SessionKey::AccessToken, ACCESS_TOKEN).unwrap();
    store.set(SessionKey::RefreshToken, REFRESH_TOKEN).unwrap();
}

/// `/api/auth/me` answers for the seeded token.
#[allow(dead_code)]
pub async fn mock_me(server: &MockServer, id: &str, role: &str) {
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("authorization", format!("Bearer {}", ACCESS_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": id,
            "email": format!("{}@example.com", role),
            "role": role,
        })))
        .mount(server)
        .await;
}

/// A matched listing as the backend serializes it.
#[allow(dead_code)]
pub fn startup_json(id: &str, stage: &str, industry: &str, region: &str, min_check: f64) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("Startup {}", id),
        "description": "Test listing",
        "stage": [stage],
        "industry": [industry],
        "region": [region],
        "min_check": min_check,
    })
}

/// Number of requests the server saw for `path`.
#[allow(dead_code)]
pub async fn requests_to(server: &MockServer, request_path: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path() == request_path)
        .count()
}
