// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sign-in, registration and sign-out flows.

use crate::error::AppError;
use crate::models::{RegisterForm, Role};
use crate::routes::Route;
use crate::store::{self, SessionKey};
use crate::App;
use validator::Validate;

pub const LOGIN_FAILED_MESSAGE: &str = "Sign-in failed. Check your email and password.";
pub const PROFILE_UNAVAILABLE_MESSAGE: &str = "Could not load your profile.";
pub const BLANK_FIELDS_MESSAGE: &str = "Please fill in all fields.";

// ─── Sign-in ─────────────────────────────────────────────────────

/// Sign-in form with its inline error.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    error: Option<String>,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            error: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Log in, publish the identity and navigate to the role's landing view.
    ///
    /// Returns the landing route, or `None` with the inline error set.
    pub async fn submit(&mut self, app: &App) -> Option<Route> {
        self.error = None;

        let tokens = match app.api.login(self.email.trim(), &self.password).await {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::warn!(error = %e, "Login failed");
                self.error = Some(login_error_message(&e));
                return None;
            }
        };

        if let Err(e) = store::store_credentials(app.store.as_ref(), &tokens) {
            tracing::error!(error = %e, "Failed to persist credentials");
            self.error = Some(e.user_message());
            return None;
        }

        let Some(identity) = app.identity.resolve_identity().await else {
            self.error = Some(PROFILE_UNAVAILABLE_MESSAGE.to_string());
            return None;
        };

        let landing = Route::landing_for(&identity.role);
        tracing::info!(user_id = %identity.id, role = %identity.role, "Signed in");
        app.auth.set_user(Some(identity));
        app.navigator.push(landing.clone());
        Some(landing)
    }
}

fn login_error_message(error: &AppError) -> String {
    match error {
        AppError::Api { detail: None, .. } => LOGIN_FAILED_MESSAGE.to_string(),
        other => other.user_message(),
    }
}

// ─── Registration ────────────────────────────────────────────────

/// Registration page: the form plus its inline error.
#[derive(Debug, Clone)]
pub struct RegisterPage {
    pub form: RegisterForm,
    error: Option<String>,
}

impl RegisterPage {
    pub fn new(form: RegisterForm) -> Self {
        Self { form, error: None }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate locally, create the account, then go to sign-in.
    ///
    /// Validation failures issue no request.
    pub async fn submit(&mut self, app: &App) -> bool {
        self.error = None;

        if let Some(message) = registration_error(&self.form) {
            self.error = Some(message);
            return false;
        }

        match app.api.register(&self.form).await {
            Ok(response) => {
                tracing::info!(role = %self.form.role, response = %response.message, "Account registered");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Registration failed");
                self.error = Some(e.user_message());
                return false;
            }
        }

        if let Err(e) = app.store.set(SessionKey::Role, self.form.role.as_str()) {
            tracing::warn!(error = %e, "Failed to persist user role");
        }
        app.navigator.push(Route::SignIn);
        true
    }
}

/// First problem with the form, checked in field order.
fn registration_error(form: &RegisterForm) -> Option<String> {
    if form.has_blank_fields() {
        return Some(BLANK_FIELDS_MESSAGE.to_string());
    }

    let errors = form.validate().err()?;
    let fields = errors.field_errors();
    ["email", "password"]
        .iter()
        .filter_map(|name| fields.get(*name))
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .or_else(|| Some(errors.to_string()))
}

/// Registration form with empty fields for `role`.
pub fn blank_registration(role: Role) -> RegisterForm {
    RegisterForm {
        email: String::new(),
        password: String::new(),
        role,
        company_name: String::new(),
        contacts: String::new(),
        full_name: String::new(),
    }
}

// ─── Sign-out ────────────────────────────────────────────────────

/// Sign out: invalidate the refresh token server-side when a full credential
/// pair is stored, then always clear the session and go to sign-in.
pub async fn logout(app: &App) {
    match store::credentials(app.store.as_ref()) {
        Some(pair) => {
            if let Err(e) = app.api.logout(&pair.refresh_token).await {
                tracing::warn!(error = %e, "Server-side logout failed, clearing session anyway");
            }
        }
        None => tracing::debug!("No credential pair stored, skipping server logout"),
    }

    if let Err(e) = app.store.clear() {
        tracing::error!(error = %e, "Failed to clear session store");
    }
    app.auth.teardown();
    app.navigator.push(Route::SignIn);
    tracing::info!("Signed out");
}
