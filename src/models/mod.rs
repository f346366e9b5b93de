// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models exchanged with the matchmaking API.

pub mod profile;
pub mod startup;
pub mod user;

pub use profile::{
    normalize_check, FounderProfile, FounderProfilePayload, InvestorFilterProfile,
    InvestorProfilePayload,
};
pub use startup::{rounded_totals, PitchScore, PitchScores, Startup};
pub use user::{Identity, MessageResponse, RegisterForm, Role, TokenResponse, UploadResult};

/// Lenient field decoders for payloads whose shape varies by endpoint.
pub(crate) mod de {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Int(i64),
        Float(f64),
    }

    /// Accept `"42"`, `42` or `42.0` for an identifier.
    pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match StringOrNumber::deserialize(deserializer)? {
            StringOrNumber::String(s) => s,
            StringOrNumber::Int(n) => n.to_string(),
            StringOrNumber::Float(f) => f.to_string(),
        })
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
        Null(()),
    }

    /// Accept a single string, a list of strings, or null.
    pub fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match OneOrMany::deserialize(deserializer)? {
            OneOrMany::One(s) if s.is_empty() => Vec::new(),
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
            OneOrMany::Null(()) => Vec::new(),
        })
    }

    /// Accept a single string or a list, keeping only the first entry.
    pub fn first_of_many<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(one_or_many(deserializer)?
            .into_iter()
            .next()
            .unwrap_or_default())
    }

    /// Numbers that may arrive as null.
    pub fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
    }
}
