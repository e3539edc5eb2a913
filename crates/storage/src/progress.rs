//! Typed access to the checklist keys in a [`KeyValueStore`].

use std::sync::Arc;

use aula_core::model::ProgressMap;
use tracing::warn;

use crate::repository::{KeyValueStore, StorageError};

/// Key holding the serialized completion mapping.
pub const PROGRESS_KEY: &str = "consejosProgress";

/// Key holding the day label of the last initialization.
pub const ROTATION_KEY: &str = "consejosRotationDate";

#[derive(Clone)]
pub struct ProgressStore {
    values: Arc<dyn KeyValueStore>,
}

impl ProgressStore {
    #[must_use]
    pub fn new(values: Arc<dyn KeyValueStore>) -> Self {
        Self { values }
    }

    /// Load the completion mapping.
    ///
    /// Never fails: an absent key, unreadable backend, or malformed JSON all
    /// read as an empty mapping.
    pub async fn load(&self) -> ProgressMap {
        let raw = match self.values.get(PROGRESS_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return ProgressMap::new(),
            Err(err) => {
                warn!(key = PROGRESS_KEY, %err, "progress unreadable, using empty state");
                return ProgressMap::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!(key = PROGRESS_KEY, %err, "progress malformed, using empty state");
            ProgressMap::new()
        })
    }

    /// Replace the stored mapping.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the mapping cannot be serialized or written.
    pub async fn save(&self, progress: &ProgressMap) -> Result<(), StorageError> {
        let raw = serde_json::to_string(progress)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.values.set(PROGRESS_KEY, &raw).await
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub async fn rotation_date(&self) -> Result<Option<String>, StorageError> {
        self.values.get(ROTATION_KEY).await
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    pub async fn record_rotation_date(&self, day: &str) -> Result<(), StorageError> {
        self.values.set(ROTATION_KEY, day).await
    }
}
