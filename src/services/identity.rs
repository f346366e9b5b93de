// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Resolves the current identity from the stored access token.

use crate::models::Identity;
use crate::services::ApiClient;
use crate::store::{SessionKey, SharedStore};

/// Looks up who the stored access token belongs to.
///
/// Fails soft: every failure (no token, transport error, non-success status,
/// undecodable body) is logged and reported as "no identity".
#[derive(Clone)]
pub struct IdentityResolver {
    api: ApiClient,
    store: SharedStore,
}

impl IdentityResolver {
    pub fn new(api: ApiClient, store: SharedStore) -> Self {
        Self { api, store }
    }

    /// Resolve the identity, persisting role and user id on success.
    pub async fn resolve_identity(&self) -> Option<Identity> {
        let Some(access_token) = self.store.get(SessionKey::AccessToken) else {
            tracing::debug!("No access token stored, skipping identity lookup");
            return None;
        };

        let identity = match self.api.me(&access_token).await {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to resolve identity");
                return None;
            }
        };

        if let Err(e) = self.store.set(SessionKey::Role, identity.role.as_str()) {
            tracing::warn!(error = %e, "Failed to persist user role");
        }
        if let Err(e) = self.store.set(SessionKey::UserId, &identity.id) {
            tracing::warn!(error = %e, "Failed to persist user id");
        }

        tracing::info!(user_id = %identity.id, role = %identity.role, "Identity resolved");
        Some(identity)
    }
}
