// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Dealscout: client for a venture matchmaking platform
//!
//! This crate provides the client side of the platform: the persisted
//! session, identity resolution, role-based routing guards, and the investor
//! sourcing and founder views. Matching and scoring happen server-side.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use config::Config;
use error::Result;
use routes::{MemoryHistory, Navigator, Route};
use services::{ApiClient, AuthContext, IdentityResolver};
use std::sync::Arc;
use store::{FileSessionStore, MemorySessionStore, SharedStore};

/// Shared application state.
pub struct App {
    pub config: Config,
    pub store: SharedStore,
    pub api: ApiClient,
    pub identity: IdentityResolver,
    pub auth: AuthContext,
    pub navigator: Arc<dyn Navigator>,
}

impl App {
    /// Wire the application around an explicit store and navigator.
    pub fn new(config: Config, store: SharedStore, navigator: Arc<dyn Navigator>) -> Result<Self> {
        let api = ApiClient::new(&config, store.clone())?;
        let identity = IdentityResolver::new(api.clone(), store.clone());

        Ok(Self {
            config,
            store,
            api,
            identity,
            auth: AuthContext::new(),
            navigator,
        })
    }

    /// Build the application from configuration alone.
    ///
    /// Uses the file store when `session_file` is set, otherwise memory.
    pub fn from_config(config: Config) -> Result<Self> {
        let store: SharedStore = match &config.session_file {
            Some(path) => Arc::new(FileSessionStore::open(path)?),
            None => Arc::new(MemorySessionStore::new()),
        };
        let navigator = Arc::new(MemoryHistory::starting_at(Route::SignIn));
        Self::new(config, store, navigator)
    }

    /// Application mount: resolve the identity once.
    pub async fn mount(&self) {
        self.auth.mount(&self.identity).await;
    }
}
