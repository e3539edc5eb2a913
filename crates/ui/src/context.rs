use std::sync::Arc;

use aula_core::Clock;
use aula_core::schedule::Schedule;
use services::{ChecklistService, CommunityBrowser};

pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;
    fn schedule(&self) -> Schedule;

    fn checklist(&self) -> Arc<ChecklistService>;
    fn community(&self) -> Arc<CommunityBrowser>;
}

#[derive(Clone)]
pub struct AppContext {
    clock: Clock,
    schedule: Schedule,

    checklist: Arc<ChecklistService>,
    community: Arc<CommunityBrowser>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            schedule: app.schedule(),
            checklist: app.checklist(),
            community: app.community(),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Schedule markup as authored, before any ordering.
    #[must_use]
    pub fn schedule(&self) -> Schedule {
        self.schedule.clone()
    }

    #[must_use]
    pub fn checklist(&self) -> Arc<ChecklistService> {
        Arc::clone(&self.checklist)
    }

    #[must_use]
    pub fn community(&self) -> Arc<CommunityBrowser> {
        Arc::clone(&self.community)
    }
}

// Provided by the composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
