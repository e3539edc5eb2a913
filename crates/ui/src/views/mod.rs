mod checklist;
mod community;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use checklist::{ActivityCard, ChecklistView};
pub use community::{BookCard, CommunityView, LessonCard};
pub use state::{ViewError, ViewState, view_state_from_resource};
