//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;

/// Errors emitted by `ChecklistService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChecklistError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by a `ContributionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContributionError {
    #[error("lesson not found")]
    NotFound,
    #[error("only administrators can delete lessons")]
    Forbidden,
    #[error(transparent)]
    Storage(StorageError),
}

impl From<StorageError> for ContributionError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound => Self::NotFound,
            other => Self::Storage(other),
        }
    }
}
