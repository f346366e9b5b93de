// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Founder profile form and pitch deck upload.

use crate::models::FounderProfile;
use crate::App;
use std::path::Path;
use std::sync::Arc;

pub const PROFILE_SAVED_MESSAGE: &str = "Profile saved.";
pub const NO_FILE_MESSAGE: &str = "Please select a file first.";
pub const UPLOAD_OK_MESSAGE: &str = "Pitch deck uploaded and processed successfully.";
pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed. Please try again.";

/// Founder landing page.
///
/// Shows the profile form until a profile is submitted; afterwards the form
/// is hidden until the founder chooses to edit it again.
pub struct FounderPage {
    app: Arc<App>,
    pub profile: FounderProfile,
    submitted: bool,
    notice: Option<String>,
    error: Option<String>,
    upload_message: Option<String>,
    startup_score: Option<f64>,
}

impl FounderPage {
    pub fn new(app: Arc<App>) -> Self {
        Self {
            app,
            profile: FounderProfile::default(),
            submitted: false,
            notice: None,
            error: None,
            upload_message: None,
            startup_score: None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn shows_form(&self) -> bool {
        !self.submitted
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn upload_message(&self) -> Option<&str> {
        self.upload_message.as_deref()
    }

    /// Score from the last successful deck analysis.
    pub fn startup_score(&self) -> Option<f64> {
        self.startup_score
    }

    /// Load the stored profile; any failure leaves an empty form.
    pub async fn mount(&mut self) {
        match self.app.api.founder_profile().await {
            Ok(profile) if profile.is_filled() => {
                tracing::debug!("Founder profile loaded");
                self.profile = profile;
                self.submitted = true;
            }
            Ok(_) => tracing::debug!("Founder profile is empty"),
            Err(e) if e.is_not_found() => tracing::info!("No founder profile yet"),
            Err(e) => tracing::warn!(error = %e, "Failed to load founder profile"),
        }
    }

    pub async fn submit(&mut self) -> bool {
        self.notice = None;
        self.error = None;

        match self.app.api.save_founder_profile(&self.profile.to_payload()).await {
            Ok(_) => {
                tracing::info!(name = %self.profile.name, "Founder profile saved");
                self.submitted = true;
                self.notice = Some(PROFILE_SAVED_MESSAGE.to_string());
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to save founder profile");
                self.error = Some(e.user_message());
                false
            }
        }
    }

    pub fn edit(&mut self) {
        self.submitted = false;
        self.notice = None;
    }

    /// Hide the form without saving.
    pub fn hide(&mut self) {
        self.submitted = true;
    }

    /// Upload the deck at `path` for analysis.
    pub async fn upload_pitch_deck(&mut self, path: Option<&Path>) -> bool {
        let Some(path) = path else {
            self.upload_message = Some(NO_FILE_MESSAGE.to_string());
            return false;
        };

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "pitch_deck".to_string());

        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "Failed to read pitch deck");
                self.upload_message = Some(UPLOAD_FAILED_MESSAGE.to_string());
                return false;
            }
        };

        match self.app.api.upload_pitch_deck(&file_name, bytes).await {
            Ok(result) => {
                self.startup_score = result.analysis_result.map(|a| a.startup_score);
                tracing::info!(
                    file_name = %file_name,
                    score = ?self.startup_score,
                    "Pitch deck uploaded"
                );
                self.upload_message = Some(UPLOAD_OK_MESSAGE.to_string());
                true
            }
            Err(e) => {
                tracing::error!(error = %e, file_name = %file_name, "Pitch deck upload failed");
                self.upload_message = Some(UPLOAD_FAILED_MESSAGE.to_string());
                false
            }
        }
    }
}
