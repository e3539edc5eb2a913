use std::sync::Arc;
use std::time::Duration;

use aula_core::catalog::{SearchQuery, filter_books, filter_lessons};
use aula_core::model::{BookRecord, LessonId, LessonRecord, LevelFilter};
use tracing::{info, warn};
use url::form_urlencoded;

use super::contribution::ContributionService;
use super::notice::{Notice, NoticeStyle};
use crate::error::ContributionError;

/// Pause before the lesson list is refreshed after a delete.
pub const RELOAD_DELAY: Duration = Duration::from_millis(500);

const CONTRIBUTE_PATH: &str = "/Contribute/";

/// Explicit UI state for the community page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrowserState {
    pub level: LevelFilter,
    pub search: String,
    pub pending_delete: Option<LessonId>,
}

/// How the user is asked to confirm a delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletePrompt {
    /// Show the confirmation modal; the id is kept until confirm or cancel.
    Modal,
    /// No modal available: ask with a blocking dialog.
    Blocking { message: &'static str },
}

impl BrowserState {
    /// Switch level tabs. Clears the search text.
    pub fn select_level(&mut self, level: LevelFilter) {
        self.level = level;
        self.search.clear();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    #[must_use]
    pub fn query(&self) -> SearchQuery {
        SearchQuery::new(&self.search)
    }

    #[must_use]
    pub fn contribute_url(&self) -> String {
        contribute_url(self.level)
    }

    /// Start the delete flow for `id`.
    pub fn request_delete(&mut self, id: LessonId, modal_available: bool) -> DeletePrompt {
        if modal_available {
            self.pending_delete = Some(id);
            DeletePrompt::Modal
        } else {
            DeletePrompt::Blocking {
                message: "¿Confirmar eliminación?",
            }
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
}

/// Destination of the "contribute" button for the selected level.
#[must_use]
pub fn contribute_url(level: LevelFilter) -> String {
    match level.level() {
        None => CONTRIBUTE_PATH.to_owned(),
        Some(level) => with_query(&[("level", level.as_str())]),
    }
}

/// Destination of the "suggest edit" button for a lesson.
#[must_use]
pub fn edit_url(id: &LessonId) -> String {
    with_query(&[("editLesson", id.as_str())])
}

fn with_query(pairs: &[(&str, &str)]) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    format!("{CONTRIBUTE_PATH}?{query}")
}

/// Lessons ready to render, with the delete control visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonListing {
    pub lessons: Vec<LessonRecord>,
    pub can_delete: bool,
}

#[derive(Clone)]
pub struct CommunityBrowser {
    service: Arc<dyn ContributionService>,
    notices: NoticeStyle,
}

impl CommunityBrowser {
    #[must_use]
    pub fn new(service: Arc<dyn ContributionService>, notices: NoticeStyle) -> Self {
        Self { service, notices }
    }

    #[must_use]
    pub fn notice_style(&self) -> NoticeStyle {
        self.notices
    }

    /// Published lessons matching the state's level and search, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ContributionError` if the service cannot list lessons.
    pub async fn lessons(&self, state: &BrowserState) -> Result<LessonListing, ContributionError> {
        let lessons = self.service.published_lessons().await?;
        Ok(LessonListing {
            lessons: filter_lessons(lessons, state.level, &state.query()),
            can_delete: self.service.is_admin(),
        })
    }

    /// Catalog books for the state's level; empty means the section is hidden.
    #[must_use]
    pub fn books(&self, state: &BrowserState) -> Vec<BookRecord> {
        filter_books(state.level, &state.query())
    }

    /// # Errors
    ///
    /// Returns `ContributionError` if the service fails; a missing lesson is `Ok(None)`.
    pub async fn lesson_detail(
        &self,
        id: &LessonId,
    ) -> Result<Option<LessonRecord>, ContributionError> {
        self.service.lesson_by_id(id).await
    }

    /// Delete the lesson awaiting modal confirmation, if any, and clear it.
    pub async fn confirm_delete(&self, state: &mut BrowserState) -> Option<Notice> {
        let id = state.pending_delete.take()?;
        Some(self.perform_delete(&id).await)
    }

    /// Delete `id` and describe the outcome for the user.
    pub async fn perform_delete(&self, id: &LessonId) -> Notice {
        match self.service.delete_contribution(id).await {
            Ok(()) => {
                info!(lesson = %id, "lesson deleted");
                self.notices.lesson_deleted()
            }
            Err(err) => {
                warn!(lesson = %id, %err, "lesson delete failed");
                self.notices.delete_failed(&err.to_string())
            }
        }
    }
}
