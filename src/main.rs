// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dealscout command-line client
//!
//! Restores (or establishes) a session against the matchmaking API and
//! loads the landing view for the signed-in user's role, or the view named
//! by the first argument (e.g. `dealscout '/sourcing?edit=true'`).

use dealscout::{
    config::Config,
    middleware::{require_auth, GuardOutcome},
    models::Role,
    routes::{auth::LoginForm, founder::FounderPage, sourcing::SourcingPage, Route},
    App,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env()?;
    tracing::info!(
        api = %config.api_base_url,
        persistent = config.session_file.is_some(),
        "Starting Dealscout client"
    );

    let email = config.email.clone();
    let password = config.password.clone();
    let app = Arc::new(App::from_config(config)?);

    // Abort in-flight loads on Ctrl-C
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Interrupted, cancelling outstanding requests");
                cancel.cancel();
            }
        });
    }

    app.mount().await;

    if app.auth.snapshot().trusted_user().is_none() {
        if let (Some(email), Some(password)) = (email, password) {
            let mut form = LoginForm::new(email, password);
            if form.submit(&app).await.is_none() {
                tracing::error!(
                    reason = form.error().unwrap_or_default(),
                    "Sign-in failed"
                );
                return Ok(());
            }
        }
    }

    let role = app.auth.snapshot().trusted_user().map(|u| u.role.clone());
    let Some(role) = role else {
        require_auth(&app.auth, app.navigator.as_ref(), None);
        tracing::info!(route = ?app.navigator.current(), "No session, sign-in required");
        return Ok(());
    };

    if require_auth(&app.auth, app.navigator.as_ref(), Some(&role)) != Some(GuardOutcome::Allowed) {
        return Ok(());
    }

    // An explicit path such as `/sourcing?edit=true` overrides the landing view
    let target = std::env::args()
        .nth(1)
        .and_then(|path| Route::parse(&path))
        .unwrap_or_else(|| Route::landing_for(&role));
    if app.navigator.current().as_ref() != Some(&target) {
        app.navigator.push(target);
    }

    match role {
        Role::Investor => {
            let mut page = SourcingPage::with_cancellation(app.clone(), cancel.clone());
            page.mount_current().await;
            let view = page.view();
            tracing::info!(
                state = ?view.state(),
                listings = view.all_startups().len(),
                "Sourcing view loaded"
            );

            let scores = page.load_scores().await;
            for startup in page.view().filtered_startups() {
                tracing::info!(
                    id = %startup.id,
                    name = %startup.name,
                    score = scores.get(&startup.id).copied().unwrap_or(0),
                    "Matched startup"
                );
            }
        }
        Role::Founder => {
            let mut page = FounderPage::new(app.clone());
            page.mount().await;
            tracing::info!(
                submitted = page.is_submitted(),
                name = %page.profile.name,
                "Founder view loaded"
            );
        }
        Role::Other(other) => {
            tracing::info!(role = %other, route = %Route::Dashboard, "No dedicated view for role");
        }
    }

    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dealscout=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
