use std::sync::Arc;

use async_trait::async_trait;
use aula_core::model::{LessonId, LessonRecord};
use storage::LessonRepository;

use crate::error::ContributionError;

/// Lesson operations offered to the community page.
#[async_trait]
pub trait ContributionService: Send + Sync {
    /// # Errors
    ///
    /// Returns `ContributionError` if lessons cannot be fetched.
    async fn published_lessons(&self) -> Result<Vec<LessonRecord>, ContributionError>;

    /// # Errors
    ///
    /// Returns `ContributionError` on fetch failures; a missing lesson is `Ok(None)`.
    async fn lesson_by_id(&self, id: &LessonId) -> Result<Option<LessonRecord>, ContributionError>;

    /// # Errors
    ///
    /// Returns `ContributionError` if the lesson cannot be deleted.
    async fn delete_contribution(&self, id: &LessonId) -> Result<(), ContributionError>;

    fn is_admin(&self) -> bool;
}

/// Contribution service backed by a local lesson repository.
#[derive(Clone)]
pub struct LocalContributionService {
    lessons: Arc<dyn LessonRepository>,
    admin: bool,
}

impl LocalContributionService {
    #[must_use]
    pub fn new(lessons: Arc<dyn LessonRepository>, admin: bool) -> Self {
        Self { lessons, admin }
    }

    /// Store or replace a published lesson.
    ///
    /// # Errors
    ///
    /// Returns `ContributionError::Storage` if the lesson cannot be written.
    pub async fn publish(&self, lesson: &LessonRecord) -> Result<(), ContributionError> {
        self.lessons.upsert_lesson(lesson).await?;
        Ok(())
    }
}

#[async_trait]
impl ContributionService for LocalContributionService {
    async fn published_lessons(&self) -> Result<Vec<LessonRecord>, ContributionError> {
        Ok(self.lessons.list_published().await?)
    }

    async fn lesson_by_id(&self, id: &LessonId) -> Result<Option<LessonRecord>, ContributionError> {
        Ok(self.lessons.get_lesson(id).await?)
    }

    async fn delete_contribution(&self, id: &LessonId) -> Result<(), ContributionError> {
        if !self.admin {
            return Err(ContributionError::Forbidden);
        }
        self.lessons.delete_lesson(id).await?;
        Ok(())
    }

    fn is_admin(&self) -> bool {
        self.admin
    }
}
