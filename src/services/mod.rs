// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - API access and session-level logic.

pub mod api;
pub mod auth_context;
pub mod identity;

pub use api::ApiClient;
pub use auth_context::{AuthContext, AuthState};
pub use identity::IdentityResolver;
