// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP client for the matchmaking API.
//!
//! Every call goes through the reverse-proxy `/api/...` prefix and carries the
//! stored access token as a bearer header when one exists. No call is retried.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::startup::MatchesResponse;
use crate::models::{
    FounderProfile, FounderProfilePayload, Identity, InvestorFilterProfile,
    InvestorProfilePayload, MessageResponse, PitchScores, RegisterForm, Startup, TokenResponse,
    UploadResult,
};
use crate::store::{SessionKey, SharedStore};
use serde::de::DeserializeOwned;

/// Matchmaking API client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: SharedStore,
}

impl ApiClient {
    /// Create a client for the API behind `config.api_base_url`.
    pub fn new(config: &Config, store: SharedStore) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("HTTP client init failed: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            store,
        })
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the stored access token, if any.
    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.store.get(SessionKey::AccessToken) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    // ─── Auth ────────────────────────────────────────────────────

    /// Exchange email and password for a token pair (OAuth2 password grant).
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse> {
        let response = self
            .authorized(self.http.post(self.url("/api/auth/login")))
            .form(&[
                ("grant_type", "password"),
                ("username", email),
                ("password", password),
            ])
            .send()
            .await?;

        check_response_json(response).await
    }

    /// Create a new account.
    pub async fn register(&self, form: &RegisterForm) -> Result<MessageResponse> {
        let response = self
            .authorized(self.http.post(self.url("/api/auth/register")))
            .json(form)
            .send()
            .await?;

        check_response_json(response).await
    }

    /// Invalidate the server-side session for a refresh token.
    pub async fn logout(&self, refresh_token: &str) -> Result<()> {
        let response = self
            .authorized(self.http.post(self.url("/api/auth/logout")))
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .send()
            .await?;

        check_response(response).await?;
        Ok(())
    }

    /// Resolve the identity behind an access token.
    pub async fn me(&self, access_token: &str) -> Result<Identity> {
        let response = self
            .http
            .get(self.url("/api/auth/me"))
            .bearer_auth(access_token)
            .send()
            .await?;

        check_response_json(response).await
    }

    // ─── Investors ───────────────────────────────────────────────

    /// Fetch the stored investor filter profile.
    pub async fn investor_profile(&self, investor_id: &str) -> Result<InvestorFilterProfile> {
        let path = format!(
            "/api/investors/profile/{}",
            urlencoding::encode(investor_id)
        );
        self.get_json(&path).await
    }

    /// Save the investor filter profile for the current user.
    pub async fn save_investor_profile(
        &self,
        payload: &InvestorProfilePayload,
    ) -> Result<MessageResponse> {
        tracing::debug!(
            stages = payload.investment_stage.len(),
            industries = payload.industry.len(),
            regions = payload.region.len(),
            min_check = payload.min_check,
            "Saving investor profile"
        );

        let response = self
            .authorized(self.http.post(self.url("/api/startups/investors/profile")))
            .json(payload)
            .send()
            .await?;

        check_response_json(response).await
    }

    /// Listings matched to the current user's profile.
    pub async fn matched_startups(&self) -> Result<Vec<Startup>> {
        let envelope: MatchesResponse = self.get_json("/api/startups/matches/me").await?;
        Ok(envelope.startups)
    }

    /// Move a listing to the due-diligence stage.
    pub async fn select_startup(&self, startup_id: &str) -> Result<MessageResponse> {
        let path = format!("/api/startups/select/{}", urlencoding::encode(startup_id));
        let response = self
            .authorized(self.http.post(self.url(&path)))
            .send()
            .await?;

        check_response_json(response).await
    }

    // ─── Startups ────────────────────────────────────────────────

    /// Fetch a single listing.
    pub async fn startup(&self, startup_id: &str) -> Result<Startup> {
        let path = format!("/api/startups/{}", urlencoding::encode(startup_id));
        self.get_json(&path).await
    }

    /// Batch fetch of scoring breakdowns.
    pub async fn pitch_scores(&self, startup_ids: &[String]) -> Result<PitchScores> {
        let response = self
            .authorized(self.http.get(self.url("/api/startups/batch/pitch-scores")))
            .query(&[("ids", startup_ids.join(","))])
            .send()
            .await?;

        check_response_json(response).await
    }

    // ─── Founders ────────────────────────────────────────────────

    pub async fn founder_profile(&self) -> Result<FounderProfile> {
        self.get_json("/api/startups/founders/profile").await
    }

    pub async fn save_founder_profile(
        &self,
        payload: &FounderProfilePayload,
    ) -> Result<MessageResponse> {
        let response = self
            .authorized(self.http.post(self.url("/api/startups/founders/profile")))
            .json(payload)
            .send()
            .await?;

        check_response_json(response).await
    }

    /// Upload a pitch deck for analysis (multipart field `file`).
    pub async fn upload_pitch_deck(&self, file_name: &str, bytes: Vec<u8>) -> Result<UploadResult> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(deck_mime_type(file_name))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .authorized(self.http.post(self.url("/api/startups/founders/upload")))
            .multipart(form)
            .send()
            .await?;

        check_response_json(response).await
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .authorized(self.http.get(self.url(path)))
            .send()
            .await?;

        check_response_json(response).await
    }
}

fn deck_mime_type(file_name: &str) -> &'static str {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".pptx") {
        "application/vnd.openxmlformats-officedocument.presentationml.presentation"
    } else {
        "application/octet-stream"
    }
}

/// Check response status and return error if not successful.
async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    tracing::debug!(status = %status, body = %body, "API request failed");

    Err(AppError::Api {
        status: status.as_u16(),
        detail: extract_detail(&body),
    })
}

/// Check response and parse JSON body.
async fn check_response_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let response = check_response(response).await?;
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| AppError::Decode(format!("JSON parse error: {}", e)))
}

/// Pull a human-readable `detail` out of an error body.
///
/// String details are used as-is; structured ones (validation error lists)
/// are rendered as JSON.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail() {
        assert_eq!(
            extract_detail(r#"{"detail": "Email already registered"}"#),
            Some("Email already registered".to_string())
        );
        assert_eq!(
            extract_detail(r#"{"detail": [{"loc": ["body"]}]}"#),
            Some(r#"[{"loc":["body"]}]"#.to_string())
        );
        assert_eq!(extract_detail(r#"{"error": "x"}"#), None);
        assert_eq!(extract_detail("<html>Bad Gateway</html>"), None);
    }

    #[test]
    fn test_deck_mime_type() {
        assert_eq!(deck_mime_type("Deck.PDF"), "application/pdf");
        assert_eq!(deck_mime_type("notes.txt"), "application/octet-stream");
    }
}
