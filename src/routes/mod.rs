// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client views and the navigation targets between them.

pub mod auth;
pub mod filters;
pub mod founder;
pub mod navbar;
pub mod pipeline;
pub mod sourcing;
pub mod startup;

use crate::models::Role;
use std::fmt;
use std::sync::Mutex;

/// A navigable view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    SignIn,
    Register,
    Sourcing { edit: bool },
    Startups,
    Dashboard,
    Unauthorized,
    Settings,
    StartupDetail(String),
}

impl Route {
    /// Where a freshly signed-in user lands.
    pub fn landing_for(role: &Role) -> Route {
        match role {
            Role::Investor => Route::Sourcing { edit: false },
            Role::Founder => Route::Startups,
            Role::Other(_) => Route::Dashboard,
        }
    }

    /// Path (with query) for this route.
    pub fn path(&self) -> String {
        match self {
            Route::SignIn => "/auth".to_string(),
            Route::Register => "/auth/register".to_string(),
            Route::Sourcing { edit: true } => "/sourcing?edit=true".to_string(),
            Route::Sourcing { edit: false } => "/sourcing".to_string(),
            Route::Startups => "/startups".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Unauthorized => "/unauthorized".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::StartupDetail(id) => format!("/startup/{}", urlencoding::encode(id)),
        }
    }

    /// Parse a path such as `/sourcing?edit=true`. Unknown paths yield `None`.
    pub fn parse(target: &str) -> Option<Route> {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, query),
            None => (target, ""),
        };
        let path = path.trim_end_matches('/');

        let route = match path {
            "/auth" => Route::SignIn,
            "/auth/register" => Route::Register,
            "/sourcing" => Route::Sourcing {
                edit: query_flag(query, "edit"),
            },
            "/startups" => Route::Startups,
            "/dashboard" => Route::Dashboard,
            "/unauthorized" => Route::Unauthorized,
            "/settings" => Route::Settings,
            _ => {
                let id = path.strip_prefix("/startup/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Route::StartupDetail(urlencoding::decode(id).ok()?.into_owned())
            }
        };
        Some(route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// True if the query string carries `name=true`.
fn query_flag(query: &str, name: &str) -> bool {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .any(|(key, value)| key == name && value == "true")
}

/// Navigation sink used by guards and views.
pub trait Navigator: Send + Sync {
    fn push(&self, route: Route);
    fn current(&self) -> Option<Route>;
}

/// Navigator that records the visited routes in memory.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: Mutex<Vec<Route>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(route: Route) -> Self {
        Self {
            entries: Mutex::new(vec![route]),
        }
    }

    /// All routes pushed so far, oldest first.
    pub fn history(&self) -> Vec<Route> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Navigator for MemoryHistory {
    fn push(&self, route: Route) {
        tracing::debug!(route = %route, "Navigating");
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(route);
    }

    fn current(&self) -> Option<Route> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .last()
            .cloned()
    }
}
