#![forbid(unsafe_code)]

pub mod checklist;
pub mod community;
pub mod error;

pub use aula_core::Clock;

pub use checklist::{
    ActivityState, ChecklistBoard, ChecklistService, ProgressSummary, ScheduleReady,
    ScheduleWaiter, ToggleOutcome, readiness,
};
pub use community::{
    BrowserState, CommunityBrowser, ContributionService, DeletePrompt, LocalContributionService,
    Notice, NoticeKind, NoticeStyle,
};
pub use error::{ChecklistError, ContributionError};
