//! Startup listings and pitch scores.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A startup listing produced by the matching backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Startup {
    #[serde(deserialize_with = "super::de::string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Detail responses send single strings, list responses send arrays
    #[serde(default, deserialize_with = "super::de::one_or_many")]
    pub stage: Vec<String>,
    #[serde(default, deserialize_with = "super::de::one_or_many")]
    pub industry: Vec<String>,
    #[serde(default, deserialize_with = "super::de::one_or_many")]
    pub region: Vec<String>,
    #[serde(default, deserialize_with = "super::de::number_or_zero")]
    pub min_check: f64,
}

/// `GET /api/startups/matches/me` envelope.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MatchesResponse {
    #[serde(default)]
    pub startups: Vec<Startup>,
}

/// Scoring breakdown for one pitch deck.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PitchScore {
    #[serde(default, deserialize_with = "super::de::number_or_zero")]
    pub usp: f64,
    #[serde(default, deserialize_with = "super::de::number_or_zero")]
    pub market: f64,
    #[serde(default, deserialize_with = "super::de::number_or_zero")]
    pub business_model: f64,
    #[serde(default, deserialize_with = "super::de::number_or_zero")]
    pub team: f64,
    #[serde(default, deserialize_with = "super::de::number_or_zero")]
    pub finance: f64,
    #[serde(default, deserialize_with = "super::de::number_or_zero")]
    pub total: f64,
}

/// Batch score map keyed by listing id. `None` means not scored yet.
pub type PitchScores = HashMap<String, Option<PitchScore>>;

/// Rounded totals for display; missing scores read as 0.
pub fn rounded_totals(scores: &PitchScores) -> HashMap<String, i64> {
    scores
        .iter()
        .map(|(id, score)| {
            let total = score.as_ref().map(|s| s.total.round() as i64).unwrap_or(0);
            (id.clone(), total)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_shape_is_normalized() {
        let startup: Startup = serde_json::from_str(
            r#"{"id": "s1", "name": "Acme", "industry": "AI", "stage": "Seed",
                "region": "EU", "min_check": 20.0}"#,
        )
        .unwrap();
        assert_eq!(startup.industry, vec!["AI"]);
        assert_eq!(startup.description, None);
    }

    #[test]
    fn test_rounded_totals() {
        let scores: PitchScores = serde_json::from_str(
            r#"{"a": {"usp": 1, "market": 2, "business_model": 3, "team": 1,
                      "finance": 0, "total": 72.6},
                "b": null}"#,
        )
        .unwrap();
        let totals = rounded_totals(&scores);
        assert_eq!(totals["a"], 73);
        assert_eq!(totals["b"], 0);
    }
}
