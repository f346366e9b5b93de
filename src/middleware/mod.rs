// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Checks that run in front of protected views.

pub mod auth;

pub use auth::{decide, require_auth, watch_auth, GuardDecision, GuardOutcome};
