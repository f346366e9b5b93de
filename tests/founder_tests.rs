// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Founder profile and pitch deck upload tests.

use dealscout::routes::founder::{
    FounderPage, NO_FILE_MESSAGE, PROFILE_SAVED_MESSAGE, UPLOAD_FAILED_MESSAGE, UPLOAD_OK_MESSAGE,
};
use serde_json::json;
use std::io::Write;
use wiremock::matchers::{body_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

const PROFILE_PATH: &str = "/api/startups/founders/profile";
const UPLOAD_PATH: &str = "/api/startups/founders/upload";

#[tokio::test]
async fn test_stored_profile_hides_form() {
    let server = MockServer::start().await;
    let (app, store, _history) = common::create_test_app(&server);
    common::seed_session(&store);

    Mock::given(method("GET"))
        .and(path(PROFILE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Acme",
            "description": "Rockets",
            "stage": ["Seed"],
            "industry": ["Space"],
            "region": "EU",
            "min_check": 25000
        })))
        .mount(&server)
        .await;

    let mut page = FounderPage::new(app);
    page.mount().await;

    assert!(page.is_submitted());
    assert_eq!(page.profile.stage, "Seed");
    assert_eq!(page.profile.region, "EU");

    page.edit();
    assert!(page.shows_form());
    page.hide();
    assert!(!page.shows_form());
}

#[tokio::test]
async fn test_missing_profile_shows_form() {
    let server = MockServer::start().await;
    let (app, _store, _history) = common::create_test_app(&server);

    Mock::given(method("GET"))
        .and(path(PROFILE_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut page = FounderPage::new(app);
    page.mount().await;

    assert!(page.shows_form());
    assert_eq!(page.error(), None);
}

#[tokio::test]
async fn test_submit_sends_list_fields() {
    let server = MockServer::start().await;
    let (app, store, _history) = common::create_test_app(&server);
    common::seed_session(&store);

    Mock::given(method("POST"))
        .and(path(PROFILE_PATH))
        .and(body_json(json!({
            "name": "Acme",
            "description": "Rockets",
            "stage": ["Seed"],
            "industry": ["Space"],
            "region": ["EU"],
            "min_check": 25000.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut page = FounderPage::new(app);
    page.profile.name = "Acme".to_string();
    page.profile.description = "Rockets".to_string();
    page.profile.stage = "Seed".to_string();
    page.profile.industry = "Space".to_string();
    page.profile.region = "EU".to_string();
    page.profile.min_check = 25000.0;

    assert!(page.submit().await);
    assert!(page.is_submitted());
    assert_eq!(page.notice(), Some(PROFILE_SAVED_MESSAGE));
}

#[tokio::test]
async fn test_submit_failure_keeps_form() {
    let server = MockServer::start().await;
    let (app, _store, _history) = common::create_test_app(&server);

    Mock::given(method("POST"))
        .and(path(PROFILE_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut page = FounderPage::new(app);
    assert!(!page.submit().await);
    assert!(page.shows_form());
    assert!(page.error().is_some());
}

#[tokio::test]
async fn test_upload_requires_file() {
    let server = MockServer::start().await;
    let (app, _store, _history) = common::create_test_app(&server);

    let mut page = FounderPage::new(app);
    assert!(!page.upload_pitch_deck(None).await);
    assert_eq!(page.upload_message(), Some(NO_FILE_MESSAGE));
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_upload_sends_multipart_file() {
    let server = MockServer::start().await;
    let (app, store, _history) = common::create_test_app(&server);
    common::seed_session(&store);

    Mock::given(method("POST"))
        .and(path(UPLOAD_PATH))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"deck.pdf\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "uploaded",
            "file_path": "uploads/deck.pdf",
            "analysis_result": {"startup_score": 77.0}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let deck = dir.path().join("deck.pdf");
    std::fs::File::create(&deck)
        .unwrap()
        .write_all(b"%PDF-1.4 test deck")
        .unwrap();

    let mut page = FounderPage::new(app);
    assert!(page.upload_pitch_deck(Some(&deck)).await);
    assert_eq!(page.upload_message(), Some(UPLOAD_OK_MESSAGE));
    assert_eq!(page.startup_score(), Some(77.0));
}

#[tokio::test]
async fn test_upload_failure_message() {
    let server = MockServer::start().await;
    let (app, _store, _history) = common::create_test_app(&server);

    Mock::given(method("POST"))
        .and(path(UPLOAD_PATH))
        .respond_with(ResponseTemplate::new(413))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let deck = dir.path().join("deck.pptx");
    std::fs::write(&deck, b"slides").unwrap();

    let mut page = FounderPage::new(app);
    assert!(!page.upload_pitch_deck(Some(&deck)).await);
    assert_eq!(page.upload_message(), Some(UPLOAD_FAILED_MESSAGE));

    // Unreadable path fails before any request
    let missing = dir.path().join("missing.pdf");
    assert!(!page.upload_pitch_deck(Some(&missing)).await);
    assert_eq!(common::requests_to(&server, UPLOAD_PATH).await, 1);
}
