mod activity_vm;
mod book_vm;
mod lesson_vm;
mod markdown_vm;
mod time_fmt;

pub use activity_vm::{ActivityCardVm, CHECK_ICON, COMPLETED_COLOR, PENDING_COLOR};
pub use book_vm::{BookCardVm, map_book_cards};
pub use lesson_vm::{LessonCardVm, LessonDetailVm, map_lesson_cards};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use time_fmt::{format_relative_date, format_short_date};
