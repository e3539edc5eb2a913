#![forbid(unsafe_code)]

pub mod progress;
pub mod repository;
pub mod sqlite;

pub use progress::{PROGRESS_KEY, ProgressStore, ROTATION_KEY};
pub use repository::{
    InMemoryRepository, KeyValueStore, LessonRepository, Storage, StorageError,
};
