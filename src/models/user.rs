//! Identity and account models.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Account role as reported by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Investor,
    Founder,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Investor => "investor",
            Role::Founder => "founder",
            Role::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "investor" => Role::Investor,
            "founder" => Role::Founder,
            _ => Role::Other(s),
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        Role::from(s.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resolved authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// User ID (the auth service also calls it `user_id`)
    #[serde(alias = "user_id", deserialize_with = "super::de::string_or_number")]
    pub id: String,
    /// Email address (absent from some `/me` responses)
    #[serde(default)]
    pub email: String,
    pub role: Role,
    /// Any further fields the backend attaches
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Identity {
    pub fn new(id: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            role,
            extra: serde_json::Map::new(),
        }
    }
}

/// Credential pair issued by `POST /api/auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Account registration form.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct RegisterForm {
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters."))]
    pub password: String,
    pub role: Role,
    pub company_name: String,
    pub contacts: String,
    pub full_name: String,
}

impl RegisterForm {
    /// True if any text field is blank.
    pub fn has_blank_fields(&self) -> bool {
        [
            &self.email,
            &self.password,
            &self.company_name,
            &self.contacts,
            &self.full_name,
        ]
        .iter()
        .any(|v| v.trim().is_empty())
    }
}

/// Response to a pitch deck upload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResult {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub analysis_result: Option<AnalysisSummary>,
}

/// Overall score computed from an uploaded deck.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisSummary {
    #[serde(default, deserialize_with = "super::de::number_or_zero")]
    pub startup_score: f64,
}
