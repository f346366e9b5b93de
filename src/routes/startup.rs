// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Single listing detail view.

use crate::models::{PitchScore, Startup};
use crate::App;

/// Everything the detail view shows; each part may be missing independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartupDetail {
    pub startup: Option<Startup>,
    pub score: Option<PitchScore>,
}

impl StartupDetail {
    /// Rounded total score, 0 when the listing has not been scored.
    pub fn total(&self) -> i64 {
        self.score
            .as_ref()
            .map(|s| s.total.round() as i64)
            .unwrap_or(0)
    }
}

/// Fetch a listing and its pitch score concurrently.
///
/// Either fetch may fail without affecting the other; failures are logged.
pub async fn load_startup_detail(app: &App, startup_id: &str) -> StartupDetail {
    let ids = [startup_id.to_string()];
    let (startup, scores) = tokio::join!(app.api.startup(startup_id), app.api.pitch_scores(&ids));

    let startup = match startup {
        Ok(startup) => Some(startup),
        Err(e) => {
            tracing::warn!(error = %e, startup_id, "Failed to load startup");
            None
        }
    };

    let score = match scores {
        Ok(mut scores) => scores.remove(startup_id).flatten(),
        Err(e) => {
            tracing::warn!(error = %e, startup_id, "Failed to load pitch score");
            None
        }
    };

    StartupDetail { startup, score }
}
