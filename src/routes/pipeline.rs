// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Deal pipeline header shown above the investor views.

use crate::routes::{Navigator, Route};

/// Stages of the deal pipeline, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PipelineStage {
    Sourcing,
    DueDiligence,
    DealRoom,
    Collaboration,
    Monitoring,
    Exit,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 6] = [
        PipelineStage::Sourcing,
        PipelineStage::DueDiligence,
        PipelineStage::DealRoom,
        PipelineStage::Collaboration,
        PipelineStage::Monitoring,
        PipelineStage::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PipelineStage::Sourcing => "Sourcing",
            PipelineStage::DueDiligence => "Due Diligence",
            PipelineStage::DealRoom => "Deal Room",
            PipelineStage::Collaboration => "Collaboration",
            PipelineStage::Monitoring => "Monitoring",
            PipelineStage::Exit => "Exit",
        }
    }

    /// View the stage links to, if it has one.
    pub fn route(&self) -> Option<Route> {
        match self {
            PipelineStage::Sourcing => Some(Route::Sourcing { edit: false }),
            _ => None,
        }
    }
}

/// How a stage is drawn relative to the highlighted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Completed,
    Active,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipeline {
    current: PipelineStage,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            current: PipelineStage::Sourcing,
        }
    }
}

impl Pipeline {
    pub fn current(&self) -> PipelineStage {
        self.current
    }

    pub fn status(&self, stage: PipelineStage) -> StageStatus {
        match stage.cmp(&self.current) {
            std::cmp::Ordering::Less => StageStatus::Completed,
            std::cmp::Ordering::Equal => StageStatus::Active,
            std::cmp::Ordering::Greater => StageStatus::Upcoming,
        }
    }

    /// Highlight `stage`, navigating only if it has a view of its own.
    pub fn select(&mut self, stage: PipelineStage, navigator: &dyn Navigator) {
        self.current = stage;
        if let Some(route) = stage.route() {
            navigator.push(route);
        }
    }
}
