use async_trait::async_trait;
use aula_core::model::{LessonId, LessonRecord};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Flat string key-value persistence, the desktop stand-in for browser local storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Repository contract for community lessons.
#[async_trait]
pub trait LessonRepository: Send + Sync {
    /// All published lessons, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn list_published(&self) -> Result<Vec<LessonRecord>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` on backend failures. A missing lesson is `Ok(None)`.
    async fn get_lesson(&self, id: &LessonId) -> Result<Option<LessonRecord>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the lesson cannot be stored.
    async fn upsert_lesson(&self, lesson: &LessonRecord) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no lesson has this id.
    async fn delete_lesson(&self, id: &LessonId) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    values: Arc<Mutex<HashMap<String, String>>>,
    lessons: Arc<Mutex<HashMap<LessonId, LessonRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

#[async_trait]
impl LessonRepository for InMemoryRepository {
    async fn list_published(&self) -> Result<Vec<LessonRecord>, StorageError> {
        let guard = self
            .lessons
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.values().cloned().collect())
    }

    async fn get_lesson(&self, id: &LessonId) -> Result<Option<LessonRecord>, StorageError> {
        let guard = self
            .lessons
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(id).cloned())
    }

    async fn upsert_lesson(&self, lesson: &LessonRecord) -> Result<(), StorageError> {
        let mut guard = self
            .lessons
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(lesson.id.clone(), lesson.clone());
        Ok(())
    }

    async fn delete_lesson(&self, id: &LessonId) -> Result<(), StorageError> {
        let mut guard = self
            .lessons
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(id).map(|_| ()).ok_or(StorageError::NotFound)
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub values: Arc<dyn KeyValueStore>,
    pub lessons: Arc<dyn LessonRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let values: Arc<dyn KeyValueStore> = Arc::new(repo.clone());
        let lessons: Arc<dyn LessonRepository> = Arc::new(repo);
        Self { values, lessons }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aula_core::model::Level;
    use aula_core::time::fixed_now;

    fn build_lesson(id: &str) -> LessonRecord {
        LessonRecord {
            id: LessonId::new(id),
            title: format!("Lección {id}"),
            description: "Práctica".into(),
            level: Level::A2,
            author: "Ana".into(),
            content: "Merhaba".into(),
            published_at: fixed_now(),
        }
    }

    #[tokio::test]
    async fn values_overwrite_and_remove() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get("k").await.unwrap(), None);
        repo.set("k", "1").await.unwrap();
        repo.set("k", "2").await.unwrap();
        assert_eq!(repo.get("k").await.unwrap().as_deref(), Some("2"));
        repo.remove("k").await.unwrap();
        repo.remove("k").await.unwrap();
        assert_eq!(repo.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn deleting_missing_lesson_is_not_found() {
        let repo = InMemoryRepository::new();
        repo.upsert_lesson(&build_lesson("1")).await.unwrap();
        repo.delete_lesson(&LessonId::new("1")).await.unwrap();
        let err = repo.delete_lesson(&LessonId::new("1")).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
        assert!(repo.list_published().await.unwrap().is_empty());
    }
}
