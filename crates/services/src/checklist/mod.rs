//! Daily schedule checklist: ordering, toggling and persisted completion.

mod board;
mod readiness;
mod service;

pub use board::{ActivityState, BoardGroup, ChecklistBoard, ProgressSummary};
pub use readiness::{ScheduleReady, ScheduleWaiter, readiness};
pub use service::{ChecklistService, ToggleOutcome};
