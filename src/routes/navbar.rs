// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Top navigation bar.

use crate::routes::auth::logout;
use crate::routes::Route;
use crate::services::AuthState;
use crate::App;

/// Entries in the signed-in user's menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    EditProfile,
    Settings,
    Logout,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::EditProfile, MenuItem::Settings, MenuItem::Logout];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::EditProfile => "Edit profile",
            MenuItem::Settings => "Settings",
            MenuItem::Logout => "Log out",
        }
    }
}

/// What the bar shows for a given auth state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navbar {
    SignInLink,
    UserMenu { email: String, open: bool },
}

impl Navbar {
    /// The user menu only appears once loading is finished and a user exists.
    pub fn from_state(state: &AuthState) -> Self {
        match state.trusted_user() {
            Some(user) => Navbar::UserMenu {
                email: user.email.clone(),
                open: false,
            },
            None => Navbar::SignInLink,
        }
    }

    pub fn toggle(&mut self) {
        if let Navbar::UserMenu { open, .. } = self {
            *open = !*open;
        }
    }

    pub fn items(&self) -> &'static [MenuItem] {
        match self {
            Navbar::UserMenu { open: true, .. } => &MenuItem::ALL,
            _ => &[],
        }
    }
}

/// Run a menu action.
pub async fn select(app: &App, item: MenuItem) {
    match item {
        MenuItem::EditProfile => app.navigator.push(Route::Sourcing { edit: true }),
        MenuItem::Settings => app.navigator.push(Route::Settings),
        MenuItem::Logout => logout(app).await,
    }
}
