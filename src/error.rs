// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types with consistent user-facing messages.

/// Fallback text shown when the backend gives no usable `detail`.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Application error type.
///
/// Data-loading paths log these and fall back to a benign view state; form
/// submissions render [`AppError::user_message`] inline.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (HTTP {status})")]
    Api { status: u16, detail: Option<String> },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Session storage error: {0}")]
    Session(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("No authenticated identity")]
    MissingIdentity,

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Text to render next to a form after a failed submission.
    ///
    /// Backend error codes are not distinguished: a human-readable `detail`
    /// wins, everything else collapses to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            AppError::Validation(msg) => msg.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    /// HTTP status carried by the error, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, AppError>;
