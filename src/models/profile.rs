// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Investor and founder matching profiles.

use serde::{Deserialize, Serialize};

/// Stored investor filter profile (`GET /api/investors/profile/:id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorFilterProfile {
    #[serde(default, deserialize_with = "super::de::one_or_many")]
    pub investor_type: Vec<String>,
    #[serde(default, deserialize_with = "super::de::one_or_many")]
    pub investment_stage: Vec<String>,
    #[serde(default, deserialize_with = "super::de::one_or_many")]
    pub industry: Vec<String>,
    #[serde(default, deserialize_with = "super::de::one_or_many")]
    pub region: Vec<String>,
    #[serde(default, deserialize_with = "super::de::number_or_zero")]
    pub min_check: f64,
}

/// Body for `POST /api/startups/investors/profile`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestorProfilePayload {
    pub investor_type: Vec<String>,
    pub investment_stage: Vec<String>,
    pub industry: Vec<String>,
    pub region: Vec<String>,
    pub min_check: f64,
}

/// Founder profile as shown in the founder form.
///
/// The API stores lists; the form edits a single value per field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FounderProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "super::de::first_of_many")]
    pub stage: String,
    #[serde(default, deserialize_with = "super::de::first_of_many")]
    pub industry: String,
    #[serde(default, deserialize_with = "super::de::first_of_many")]
    pub region: String,
    #[serde(default, deserialize_with = "super::de::number_or_zero")]
    pub min_check: f64,
}

impl FounderProfile {
    /// A profile counts as filled in once it has a name.
    pub fn is_filled(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn to_payload(&self) -> FounderProfilePayload {
        FounderProfilePayload {
            name: self.name.clone(),
            description: self.description.clone(),
            stage: vec![self.stage.clone()],
            industry: vec![self.industry.clone()],
            region: vec![self.region.clone()],
            min_check: self.min_check,
        }
    }
}

/// Body for `POST /api/startups/founders/profile`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FounderProfilePayload {
    pub name: String,
    pub description: String,
    pub stage: Vec<String>,
    pub industry: Vec<String>,
    pub region: Vec<String>,
    pub min_check: f64,
}

/// Turn a check-size label such as `"30 000"` or `"$50,000"` into a number.
///
/// Everything except digits and `.` is dropped; empty or unparsable input is 0.
pub fn normalize_check(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_check() {
        assert_eq!(normalize_check("30 000"), 30000.0);
        assert_eq!(normalize_check("$1,500.50"), 1500.5);
        assert_eq!(normalize_check(""), 0.0);
        assert_eq!(normalize_check("n/a"), 0.0);
    }

    #[test]
    fn test_investor_profile_accepts_scalar_type() {
        let profile: InvestorFilterProfile = serde_json::from_str(
            r#"{"investor_type": "VC", "investment_stage": ["Seed"], "industry": ["AI"],
                "region": ["EU"], "min_check": 50000}"#,
        )
        .unwrap();
        assert_eq!(profile.investor_type, vec!["VC"]);
        assert_eq!(profile.min_check, 50000.0);
    }

    #[test]
    fn test_founder_profile_payload_wraps_single_values() {
        let profile: FounderProfile = serde_json::from_str(
            r#"{"name": "Acme", "description": "", "stage": "Seed",
                "industry": ["AI", "SaaS"], "region": "EU", "min_check": null}"#,
        )
        .unwrap();
        assert!(profile.is_filled());
        assert_eq!(profile.industry, "AI");

        let payload = profile.to_payload();
        assert_eq!(payload.stage, vec!["Seed"]);
        assert_eq!(payload.min_check, 0.0);
    }
}
