// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Process-wide authentication state.
//!
//! Lifecycle:
//! 1. `AuthContext::new()` starts in the loading state with no user.
//! 2. `mount()` resolves the identity exactly once per context.
//! 3. `set_user()` lets sign-in publish an identity without a second lookup.
//! 4. `teardown()` drops the identity on sign-out.
//!
//! There is no background refresh; a stale identity is only corrected by a
//! new context (next launch) or an explicit `set_user`.

use crate::models::Identity;
use crate::services::IdentityResolver;
use tokio::sync::{watch, OnceCell};

/// Snapshot of the authentication state.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<Identity>,
    pub is_loading: bool,
}

impl AuthState {
    pub fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    /// The user, but only once loading has finished.
    pub fn trusted_user(&self) -> Option<&Identity> {
        if self.is_loading {
            None
        } else {
            self.user.as_ref()
        }
    }
}

/// Shared authentication state, observed through a watch channel.
pub struct AuthContext {
    state: watch::Sender<AuthState>,
    mounted: OnceCell<()>,
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, _) = watch::channel(AuthState::loading());
        Self {
            state,
            mounted: OnceCell::new(),
        }
    }

    /// Resolve the identity on first mount. Later calls return immediately.
    pub async fn mount(&self, resolver: &IdentityResolver) {
        self.mounted
            .get_or_init(|| async {
                self.state.send_modify(|s| s.is_loading = true);
                let user = resolver.resolve_identity().await;
                tracing::debug!(authenticated = user.is_some(), "Auth context mounted");
                self.state.send_replace(AuthState {
                    user,
                    is_loading: false,
                });
            })
            .await;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.initialized()
    }

    /// Publish a new identity (or none).
    pub fn set_user(&self, user: Option<Identity>) {
        self.state.send_modify(|s| s.user = user);
    }

    /// Forget the identity after sign-out.
    pub fn teardown(&self) {
        self.set_user(None);
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Receiver that wakes on every state change.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }
}
