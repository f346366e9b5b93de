// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Investor filter form and client-side results filtering.

use crate::error::{AppError, Result};
use crate::models::{normalize_check, InvestorFilterProfile, InvestorProfilePayload, Startup};

/// Prompt shown when a required filter is left empty.
pub const REQUIRED_FILTERS_MESSAGE: &str = "Select all required filters";

/// The filter-entry form that defines the stored investor profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchForm {
    pub investor_type: String,
    pub stages: Vec<String>,
    pub industries: Vec<String>,
    pub regions: Vec<String>,
    /// Free-form label such as `"100 000"`; optional
    pub check_size: String,
}

impl SearchForm {
    /// Prefill from a stored profile so edit mode starts from current values.
    pub fn from_profile(profile: &InvestorFilterProfile) -> Self {
        Self {
            investor_type: profile.investor_type.first().cloned().unwrap_or_default(),
            stages: profile.investment_stage.clone(),
            industries: profile.industry.clone(),
            regions: profile.region.clone(),
            check_size: if profile.min_check > 0.0 {
                profile.min_check.to_string()
            } else {
                String::new()
            },
        }
    }

    pub fn toggle_stage(&mut self, value: &str) {
        toggle(&mut self.stages, value);
    }

    pub fn toggle_industry(&mut self, value: &str) {
        toggle(&mut self.industries, value);
    }

    pub fn toggle_region(&mut self, value: &str) {
        toggle(&mut self.regions, value);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Investor type, stages, industries and regions are all required.
    pub fn validate(&self) -> Result<()> {
        if self.investor_type.trim().is_empty()
            || self.stages.is_empty()
            || self.industries.is_empty()
            || self.regions.is_empty()
        {
            return Err(AppError::Validation(REQUIRED_FILTERS_MESSAGE.to_string()));
        }
        Ok(())
    }

    pub fn to_payload(&self) -> InvestorProfilePayload {
        let investor_type = self.investor_type.trim();
        InvestorProfilePayload {
            investor_type: if investor_type.is_empty() {
                Vec::new()
            } else {
                vec![investor_type.to_string()]
            },
            investment_stage: self.stages.clone(),
            industry: self.industries.clone(),
            region: self.regions.clone(),
            min_check: normalize_check(&self.check_size),
        }
    }
}

fn toggle(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
    } else {
        list.push(value.to_string());
    }
}

/// Narrowing applied to already-fetched results, without a network call.
///
/// Blank values leave the corresponding field unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilter {
    pub stage: Option<String>,
    pub industry: Option<String>,
    pub region: Option<String>,
    pub check_size: Option<String>,
}

impl ListFilter {
    pub fn is_empty(&self) -> bool {
        [&self.stage, &self.industry, &self.region, &self.check_size]
            .into_iter()
            .all(|v| active(v).is_none())
    }

    pub fn matches(&self, startup: &Startup) -> bool {
        contains(&self.stage, &startup.stage)
            && contains(&self.industry, &startup.industry)
            && contains(&self.region, &startup.region)
            && match active(&self.check_size) {
                Some(check) => startup.min_check <= list_threshold(check),
                None => true,
            }
    }

    /// Listings that satisfy every active predicate, in their original order.
    pub fn apply(&self, startups: &[Startup]) -> Vec<Startup> {
        startups
            .iter()
            .filter(|s| self.matches(s))
            .cloned()
            .collect()
    }
}

/// Threshold typed into the results filter: digits only, so `"1.5"` reads as
/// 15. Unlike the saved profile, `.` is not kept.
fn list_threshold(raw: &str) -> f64 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0.0)
}

fn contains(wanted: &Option<String>, have: &[String]) -> bool {
    match active(wanted) {
        Some(value) => have.iter().any(|h| h == value),
        None => true,
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
