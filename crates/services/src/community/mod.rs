//! Community page: lessons from the contribution service plus the book catalog.

mod browser;
mod contribution;
mod notice;

pub use browser::{
    BrowserState, CommunityBrowser, DeletePrompt, LessonListing, RELOAD_DELAY, contribute_url,
    edit_url,
};
pub use contribution::{ContributionService, LocalContributionService};
pub use notice::{Notice, NoticeKind, NoticeStyle};
