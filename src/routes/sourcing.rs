// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Investor sourcing view.
//!
//! [`SourcingView`] is the state machine (no I/O); [`SourcingPage`] drives it
//! against the API. Transitions:
//!
//! ```text
//! Init ──edit=true──────────────────────────────▶ FormEntry
//! Init ──otherwise──▶ LoadingProfile ──no profile─▶ FormEntry
//!                     LoadingProfile ──profile────▶ ResultsView
//! FormEntry ──filters submitted───────────────────▶ ResultsView
//! ResultsView ──edit profile──────────────────────▶ FormEntry
//! ```

use crate::error::{AppError, Result};
use crate::models::{
    rounded_totals, InvestorFilterProfile, InvestorProfilePayload, Startup,
};
use crate::routes::filters::{ListFilter, SearchForm};
use crate::routes::Route;
use crate::store::SessionKey;
use crate::App;
use std::collections::HashMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Lifecycle state of the sourcing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourcingState {
    Init,
    LoadingProfile,
    FormEntry,
    ResultsView,
}

/// What the view renders: the filter form or the results list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    FormEntry,
    ResultsView,
}

impl ViewMode {
    /// Form whenever edit mode is requested or no profile is loaded yet.
    pub fn derive(edit_requested: bool, profile_loaded: bool) -> Self {
        if edit_requested || !profile_loaded {
            ViewMode::FormEntry
        } else {
            ViewMode::ResultsView
        }
    }
}

/// State of the sourcing view, independent of rendering and networking.
#[derive(Debug, Clone)]
pub struct SourcingView {
    state: SourcingState,
    edit_requested: bool,
    profile: Option<InvestorFilterProfile>,
    all_startups: Vec<Startup>,
    filtered_startups: Vec<Startup>,
    list_filter: ListFilter,
    form_error: Option<String>,
}

impl Default for SourcingView {
    fn default() -> Self {
        Self::new()
    }
}

impl SourcingView {
    pub fn new() -> Self {
        Self {
            state: SourcingState::Init,
            edit_requested: false,
            profile: None,
            all_startups: Vec::new(),
            filtered_startups: Vec::new(),
            list_filter: ListFilter::default(),
            form_error: None,
        }
    }

    // ─── Accessors ───────────────────────────────────────────────

    pub fn state(&self) -> SourcingState {
        self.state
    }

    pub fn mode(&self) -> ViewMode {
        ViewMode::derive(self.edit_requested, self.profile.is_some())
    }

    pub fn profile(&self) -> Option<&InvestorFilterProfile> {
        self.profile.as_ref()
    }

    pub fn all_startups(&self) -> &[Startup] {
        &self.all_startups
    }

    pub fn filtered_startups(&self) -> &[Startup] {
        &self.filtered_startups
    }

    pub fn list_filter(&self) -> &ListFilter {
        &self.list_filter
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Results are showing but nothing matches the current criteria.
    pub fn shows_empty_notice(&self) -> bool {
        self.mode() == ViewMode::ResultsView && self.filtered_startups.is_empty()
    }

    // ─── Transitions ─────────────────────────────────────────────

    /// Leave `Init` based on the URL's `edit` flag.
    pub fn begin(&mut self, edit_requested: bool) -> SourcingState {
        self.edit_requested = edit_requested;
        self.state = if edit_requested {
            SourcingState::FormEntry
        } else {
            SourcingState::LoadingProfile
        };
        self.state
    }

    /// No profile could be loaded: first-time user (or a masked failure).
    pub fn profile_unavailable(&mut self) {
        self.state = SourcingState::FormEntry;
    }

    pub fn profile_loaded(&mut self, profile: InvestorFilterProfile) {
        self.profile = Some(profile);
        self.settle();
    }

    /// Replace the cached listings; the filtered copy starts as the full set.
    pub fn listings_loaded(&mut self, startups: Vec<Startup>) {
        self.list_filter = ListFilter::default();
        self.filtered_startups = startups.clone();
        self.all_startups = startups;
    }

    /// A successful form submission: new profile, new listings, edit mode off.
    pub fn filters_applied(&mut self, payload: &InvestorProfilePayload, startups: Vec<Startup>) {
        self.profile = Some(InvestorFilterProfile {
            investor_type: payload.investor_type.clone(),
            investment_stage: payload.investment_stage.clone(),
            industry: payload.industry.clone(),
            region: payload.region.clone(),
            min_check: payload.min_check,
        });
        self.edit_requested = false;
        self.form_error = None;
        self.listings_loaded(startups);
        self.settle();
    }

    /// The user asked to edit their profile.
    pub fn edit_requested(&mut self) {
        self.edit_requested = true;
        self.settle();
    }

    /// Close the form; only possible once a profile exists.
    pub fn hide_form(&mut self) {
        self.edit_requested = false;
        self.settle();
    }

    pub fn set_list_filter(&mut self, filter: ListFilter) {
        self.filtered_startups = filter.apply(&self.all_startups);
        self.list_filter = filter;
    }

    pub fn set_form_error(&mut self, error: Option<String>) {
        self.form_error = error;
    }

    fn settle(&mut self) {
        self.state = match self.mode() {
            ViewMode::FormEntry => SourcingState::FormEntry,
            ViewMode::ResultsView => SourcingState::ResultsView,
        };
    }
}

/// The sourcing page: a [`SourcingView`] plus the fetches that drive it.
///
/// In-flight requests are tied to the page through a cancellation token that
/// is cancelled on drop; a cancelled load applies no further updates.
pub struct SourcingPage {
    app: Arc<App>,
    view: SourcingView,
    cancel: CancellationToken,
}

impl SourcingPage {
    pub fn new(app: Arc<App>) -> Self {
        Self {
            app,
            view: SourcingView::new(),
            cancel: CancellationToken::new(),
        }
    }

    /// Tie the page to `parent`: cancelling it stops this page, dropping the
    /// page leaves it untouched.
    pub fn with_cancellation(app: Arc<App>, parent: CancellationToken) -> Self {
        Self {
            app,
            view: SourcingView::new(),
            cancel: parent.child_token(),
        }
    }

    pub fn view(&self) -> &SourcingView {
        &self.view
    }

    /// Token that aborts this page's outstanding fetches.
    pub fn cancellation(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Mount the page for the navigator's current location.
    pub async fn mount_current(&mut self) {
        let route = self.app.navigator.current();
        self.mount_at(route.as_ref()).await;
    }

    /// Mount the page for `route`; only `/sourcing?edit=true` opens the form
    /// directly.
    pub async fn mount_at(&mut self, route: Option<&Route>) {
        let edit_requested = matches!(route, Some(Route::Sourcing { edit: true }));
        self.mount(edit_requested).await;
    }

    /// Mount the page with an explicit edit flag.
    ///
    /// With `edit_requested` the form is shown and nothing is fetched.
    /// Otherwise the stored profile is loaded; any failure falls back to the
    /// form without surfacing an error.
    pub async fn mount(&mut self, edit_requested: bool) {
        if self.view.begin(edit_requested) == SourcingState::FormEntry {
            tracing::debug!("Edit mode requested, showing filter form");
            return;
        }

        let app = self.app.clone();
        let cancel = self.cancel.clone();

        let profile = tokio::select! {
            biased;
            _ = cancel.cancelled() => return,
            profile = load_profile(&app) => profile,
        };

        let Some(profile) = profile else {
            self.view.profile_unavailable();
            return;
        };
        self.view.profile_loaded(profile);

        let startups = tokio::select! {
            biased;
            _ = cancel.cancelled() => return,
            startups = app.api.matched_startups() => startups,
        };

        match startups {
            Ok(startups) => {
                tracing::info!(count = startups.len(), "Matched startups loaded");
                self.view.listings_loaded(startups);
            }
            Err(e) => tracing::warn!(error = %e, "Failed to load matched startups"),
        }
    }

    /// Submit the filter form: save the profile, refetch matches, leave edit mode.
    ///
    /// Validation failures issue no request. All failures are also kept as
    /// the view's inline form error.
    pub async fn submit_filters(&mut self, form: &SearchForm) -> Result<()> {
        self.view.set_form_error(None);

        if let Err(e) = form.validate() {
            self.view.set_form_error(Some(e.user_message()));
            return Err(e);
        }

        let payload = form.to_payload();
        let app = self.app.clone();
        let cancel = self.cancel.clone();

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(AppError::Cancelled),
            result = save_and_match(&app, &payload) => result,
        };

        match result {
            Ok(startups) => {
                tracing::info!(count = startups.len(), "Investor filters applied");
                self.view.filters_applied(&payload, startups);
                self.app.navigator.push(Route::Sourcing { edit: false });
                Ok(())
            }
            Err(AppError::Cancelled) => Err(AppError::Cancelled),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to apply investor filters");
                self.view.set_form_error(Some(e.user_message()));
                Err(e)
            }
        }
    }

    /// Edit-profile action: back to the form via `?edit=true`.
    pub fn edit_profile(&mut self) {
        self.view.edit_requested();
        self.app.navigator.push(Route::Sourcing { edit: true });
    }

    pub fn hide_filters(&mut self) {
        self.view.hide_form();
    }

    /// Narrow the cached results locally.
    pub fn apply_list_filter(&mut self, filter: ListFilter) {
        self.view.set_list_filter(filter);
    }

    /// Advance a listing to due diligence. Failures are only logged.
    pub async fn send_to_due_diligence(&self, startup_id: &str) -> bool {
        match self.app.api.select_startup(startup_id).await {
            Ok(_) => {
                tracing::info!(startup_id, "Startup sent to due diligence");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, startup_id, "Failed to send startup to due diligence");
                false
            }
        }
    }

    /// Rounded pitch-score totals for the listings currently shown.
    pub async fn load_scores(&self) -> HashMap<String, i64> {
        load_score_totals(&self.app, self.view.filtered_startups()).await
    }

    /// Open a listing's detail view.
    pub fn open_startup(&self, startup_id: &str) {
        self.app
            .navigator
            .push(Route::StartupDetail(startup_id.to_string()));
    }
}

impl Drop for SourcingPage {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Resolve the identity, then fetch that investor's stored profile.
async fn load_profile(app: &App) -> Option<InvestorFilterProfile> {
    let identity = app.identity.resolve_identity().await?;

    match app.api.investor_profile(&identity.id).await {
        Ok(profile) => {
            tracing::debug!(user_id = %identity.id, "Investor profile loaded");
            Some(profile)
        }
        Err(e) if e.is_not_found() => {
            tracing::info!(user_id = %identity.id, "No investor profile yet");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, user_id = %identity.id, "Failed to load investor profile");
            None
        }
    }
}

async fn save_and_match(app: &App, payload: &InvestorProfilePayload) -> Result<Vec<Startup>> {
    app.api.save_investor_profile(payload).await?;

    if app.store.get(SessionKey::UserId).is_none() {
        return Err(AppError::MissingIdentity);
    }

    app.api.matched_startups().await
}

/// Batch-fetch pitch scores for `startups`, rounded for display.
///
/// Runs independently of the listings fetch. No request is made for an
/// empty list; a failed request yields an empty map.
pub async fn load_score_totals(app: &App, startups: &[Startup]) -> HashMap<String, i64> {
    if startups.is_empty() {
        return HashMap::new();
    }

    let ids: Vec<String> = startups.iter().map(|s| s.id.clone()).collect();
    match app.api.pitch_scores(&ids).await {
        Ok(scores) => rounded_totals(&scores),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load pitch scores");
            HashMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn startup(id: &str) -> Startup {
        Startup {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: None,
            stage: vec!["Seed".to_string()],
            industry: vec!["AI".to_string()],
            region: vec!["EU".to_string()],
            min_check: 10_000.0,
        }
    }

    fn profile() -> InvestorFilterProfile {
        InvestorFilterProfile {
            investor_type: vec!["VC".to_string()],
            investment_stage: vec!["Seed".to_string()],
            industry: vec!["AI".to_string()],
            region: vec!["EU".to_string()],
            min_check: 50_000.0,
        }
    }

    #[test]
    fn test_view_mode_derivation() {
        assert_eq!(ViewMode::derive(true, true), ViewMode::FormEntry);
        assert_eq!(ViewMode::derive(true, false), ViewMode::FormEntry);
        assert_eq!(ViewMode::derive(false, false), ViewMode::FormEntry);
        assert_eq!(ViewMode::derive(false, true), ViewMode::ResultsView);
    }

    #[test]
    fn test_edit_flag_goes_straight_to_form() {
        let mut view = SourcingView::new();
        assert_eq!(view.begin(true), SourcingState::FormEntry);
        assert_eq!(view.mode(), ViewMode::FormEntry);
    }

    #[test]
    fn test_profile_then_listings() {
        let mut view = SourcingView::new();
        assert_eq!(view.begin(false), SourcingState::LoadingProfile);

        view.profile_loaded(profile());
        assert_eq!(view.state(), SourcingState::ResultsView);
        assert!(view.shows_empty_notice());

        view.listings_loaded(vec![startup("a"), startup("b")]);
        assert_eq!(view.filtered_startups(), view.all_startups());
        assert!(!view.shows_empty_notice());
    }

    #[test]
    fn test_edit_and_hide() {
        let mut view = SourcingView::new();
        view.begin(false);
        view.profile_loaded(profile());

        view.edit_requested();
        assert_eq!(view.state(), SourcingState::FormEntry);

        view.hide_form();
        assert_eq!(view.state(), SourcingState::ResultsView);
    }

    #[test]
    fn test_hide_without_profile_keeps_form() {
        let mut view = SourcingView::new();
        view.begin(false);
        view.profile_unavailable();

        view.hide_form();
        assert_eq!(view.state(), SourcingState::FormEntry);
    }

    #[test]
    fn test_filters_applied_leaves_edit_mode() {
        let mut view = SourcingView::new();
        view.begin(true);
        view.set_form_error(Some("old".to_string()));

        let form = SearchForm {
            investor_type: "VC".to_string(),
            stages: vec!["Seed".to_string()],
            industries: vec!["AI".to_string()],
            regions: vec!["EU".to_string()],
            check_size: "50 000".to_string(),
        };
        view.filters_applied(&form.to_payload(), vec![startup("a")]);

        assert_eq!(view.state(), SourcingState::ResultsView);
        assert_eq!(view.form_error(), None);
        assert_eq!(view.profile().map(|p| p.min_check), Some(50_000.0));
        assert_eq!(view.filtered_startups().len(), 1);
    }
}
