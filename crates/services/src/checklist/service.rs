use std::sync::Arc;

use aula_core::Clock;
use aula_core::model::ActivityId;
use aula_core::schedule::Schedule;
use chrono::{DateTime, Utc};
use storage::ProgressStore;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::board::{ChecklistBoard, ProgressSummary};
use super::readiness::ScheduleWaiter;
use crate::error::ChecklistError;

/// Result of flipping one activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub completed: bool,
    pub timestamp: DateTime<Utc>,
    pub summary: Option<ProgressSummary>,
}

#[derive(Clone)]
pub struct ChecklistService {
    clock: Clock,
    progress: ProgressStore,
    // Serializes load-modify-save of the progress mapping.
    write_lock: Arc<Mutex<()>>,
}

impl ChecklistService {
    #[must_use]
    pub fn new(clock: Clock, progress: ProgressStore) -> Self {
        Self {
            clock,
            progress,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Wait for the rendered schedule, then initialize it exactly once.
    ///
    /// Returns `None` if the rendering side goes away before any activity
    /// appears.
    pub async fn discover_and_initialize(&self, waiter: ScheduleWaiter) -> Option<ChecklistBoard> {
        let Some(schedule) = waiter.wait().await else {
            debug!("schedule publisher closed before any activity appeared");
            return None;
        };
        Some(self.initialize(schedule).await)
    }

    /// Order every group chronologically, bind persisted state, and log progress.
    ///
    /// The order is recomputed on every call; the recorded day label is
    /// informational and never skips the sort.
    pub async fn initialize(&self, mut schedule: Schedule) -> ChecklistBoard {
        schedule.order();
        info!(
            groups = schedule.groups().len(),
            "schedule sorted chronologically"
        );

        let today = self.clock.today_label();
        if let Err(err) = self.progress.record_rotation_date(&today).await {
            warn!(%err, "could not record rotation date");
        }

        let progress = self.progress.load().await;
        let board = ChecklistBoard::bind(schedule, &progress);
        log_summary(ProgressSummary::compute(board.total(), &progress));
        info!(activities = board.total(), "checklist initialized");
        board
    }

    /// Flip the completion flag for `id` and persist it with the current time.
    ///
    /// Returns `Ok(None)` when `id` is not on the board. Concurrent toggles
    /// through clones of this service are applied one at a time.
    ///
    /// # Errors
    ///
    /// Returns `ChecklistError::Storage` if the mapping cannot be written;
    /// the board is left unchanged in that case.
    pub async fn toggle(
        &self,
        board: &mut ChecklistBoard,
        id: &ActivityId,
    ) -> Result<Option<ToggleOutcome>, ChecklistError> {
        if !board.contains(id) {
            debug!(activity = %id, "toggle ignored for unknown activity");
            return Ok(None);
        }

        let _guard = self.write_lock.lock().await;
        let now = self.clock.now();
        let mut progress = self.progress.load().await;
        let completed = progress.toggle(id, now);
        self.progress.save(&progress).await?;

        board.set_completed(id, completed);
        let summary = ProgressSummary::compute(board.total(), &progress);
        log_summary(summary);

        Ok(Some(ToggleOutcome {
            completed,
            timestamp: now,
            summary,
        }))
    }

    /// Current aggregate for a board of `total` activities.
    pub async fn progress_summary(&self, total: usize) -> Option<ProgressSummary> {
        let progress = self.progress.load().await;
        ProgressSummary::compute(total, &progress)
    }
}

fn log_summary(summary: Option<ProgressSummary>) {
    if let Some(ProgressSummary { completed, total }) = summary {
        info!("Progress: {completed}/{total}");
    }
}
