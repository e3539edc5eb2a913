mod activity;
mod book;
mod ids;
mod lesson;
mod level;
mod progress;

pub use activity::{ActivityGroup, ActivityItem, DEFAULT_ACTIVITY_TITLE};
pub use book::{BookRecord, books_for_level};
pub use ids::{ActivityId, LessonId};
pub use lesson::LessonRecord;
pub use level::{Level, LevelFilter, LevelParseError};
pub use progress::{ProgressEntry, ProgressMap};
