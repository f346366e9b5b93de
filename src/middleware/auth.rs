// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Role-aware routing guard.
//!
//! The guard redirects; it does not gate rendering. Views must not show
//! protected content until the guard reports [`GuardOutcome::Allowed`].

use crate::models::Role;
use crate::routes::{Navigator, Route};
use crate::services::{AuthContext, AuthState};
use tokio_util::sync::CancellationToken;

/// What the guard would do for a given auth state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Identity still loading; no navigation yet.
    Pending,
    RedirectUnauthenticated,
    RedirectWrongRole,
    Allow,
}

/// Terminal result of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    RedirectedUnauthenticated,
    RedirectedWrongRole,
    Allowed,
}

/// Pure decision for a state snapshot.
pub fn decide(state: &AuthState, required_role: Option<&Role>) -> GuardDecision {
    if state.is_loading {
        return GuardDecision::Pending;
    }

    match (&state.user, required_role) {
        (None, _) => GuardDecision::RedirectUnauthenticated,
        (Some(user), Some(role)) if &user.role != role => GuardDecision::RedirectWrongRole,
        (Some(_), _) => GuardDecision::Allow,
    }
}

/// Evaluate the guard once against the current state.
///
/// Returns `None` while the identity is loading (and navigates nowhere).
pub fn require_auth(
    auth: &AuthContext,
    navigator: &dyn Navigator,
    required_role: Option<&Role>,
) -> Option<GuardOutcome> {
    apply(&auth.snapshot(), navigator, required_role)
}

/// Re-evaluate the guard on every auth state change until it settles.
///
/// Returns `None` if cancelled or if the context goes away first.
pub async fn watch_auth(
    auth: &AuthContext,
    navigator: &dyn Navigator,
    required_role: Option<&Role>,
    cancel: &CancellationToken,
) -> Option<GuardOutcome> {
    let mut rx = auth.subscribe();

    loop {
        let state = rx.borrow_and_update().clone();
        if let Some(outcome) = apply(&state, navigator, required_role) {
            return Some(outcome);
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => return None,
            changed = rx.changed() => {
                if changed.is_err() {
                    return None;
                }
            }
        }
    }
}

fn apply(
    state: &AuthState,
    navigator: &dyn Navigator,
    required_role: Option<&Role>,
) -> Option<GuardOutcome> {
    match decide(state, required_role) {
        GuardDecision::Pending => None,
        GuardDecision::RedirectUnauthenticated => {
            tracing::info!("No identity, redirecting to sign-in");
            navigator.push(Route::SignIn);
            Some(GuardOutcome::RedirectedUnauthenticated)
        }
        GuardDecision::RedirectWrongRole => {
            tracing::info!(
                required = required_role.map(Role::as_str).unwrap_or_default(),
                "Role mismatch, redirecting to unauthorized"
            );
            navigator.push(Route::Unauthorized);
            Some(GuardOutcome::RedirectedWrongRole)
        }
        GuardDecision::Allow => Some(GuardOutcome::Allowed),
    }
}
