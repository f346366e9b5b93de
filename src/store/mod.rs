// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persisted client session (token pair, role, user id).

pub mod file;
pub mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

use crate::error::Result;
use crate::models::TokenResponse;
use std::sync::Arc;

/// Storage key names as constants.
pub mod keys {
    pub const ACCESS_TOKEN: &str = "token";
    pub const REFRESH_TOKEN: &str = "refresh_token";
    pub const USER_ROLE: &str = "user_role";
    pub const USER_ID: &str = "user_id";
}

/// The four values the client persists between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    AccessToken,
    RefreshToken,
    Role,
    UserId,
}

impl SessionKey {
    pub const ALL: [SessionKey; 4] = [
        SessionKey::AccessToken,
        SessionKey::RefreshToken,
        SessionKey::Role,
        SessionKey::UserId,
    ];

    /// Name under which the value is stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKey::AccessToken => keys::ACCESS_TOKEN,
            SessionKey::RefreshToken => keys::REFRESH_TOKEN,
            SessionKey::Role => keys::USER_ROLE,
            SessionKey::UserId => keys::USER_ID,
        }
    }
}

/// String key-value store for the session.
///
/// Values are opaque: no token structure is checked. `clear` removes every
/// key in one step so no reader in the same task sees a half-cleared session.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: SessionKey) -> Option<String>;
    fn set(&self, key: SessionKey, value: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Shared handle passed to every component that touches the session.
pub type SharedStore = Arc<dyn SessionStore>;

/// Access and refresh token, only ever considered as a pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Read the credential pair; a lone access or refresh token counts as none.
pub fn credentials(store: &dyn SessionStore) -> Option<CredentialPair> {
    Some(CredentialPair {
        access_token: store.get(SessionKey::AccessToken)?,
        refresh_token: store.get(SessionKey::RefreshToken)?,
    })
}

/// Persist a freshly issued token pair.
///
/// The two writes are not transactional; a failure in between leaves only
/// the access token behind, which logout treats the same as no session.
pub fn store_credentials(store: &dyn SessionStore, tokens: &TokenResponse) -> Result<()> {
    store.set(SessionKey::AccessToken, &tokens.access_token)?;
    store.set(SessionKey::RefreshToken, &tokens.refresh_token)?;
    tracing::debug!("Credential pair stored");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_pair_is_absent() {
        let store = MemorySessionStore::new();
        store.set(SessionKey::AccessToken, "access").unwrap();
        assert!(credentials(&store).is_none());

        store.set(SessionKey::RefreshToken, "refresh").unwrap();
        let pair = credentials(&store).unwrap();
        assert_eq!(pair.access_token, "access");
        assert_eq!(pair.refresh_token, "refresh");
    }
}
