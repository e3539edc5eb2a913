use aula_core::model::{LessonId, LessonRecord, Level};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

pub(crate) fn parse_level(s: &str) -> Result<Level, StorageError> {
    s.parse::<Level>().map_err(ser)
}

pub(crate) fn map_lesson_row(row: &SqliteRow) -> Result<LessonRecord, StorageError> {
    let level: String = row.try_get("level").map_err(ser)?;
    Ok(LessonRecord {
        id: LessonId::new(row.try_get::<String, _>("id").map_err(ser)?),
        title: row.try_get("title").map_err(ser)?,
        description: row.try_get("description").map_err(ser)?,
        level: parse_level(&level)?,
        author: row.try_get("author").map_err(ser)?,
        content: row.try_get("content").map_err(ser)?,
        published_at: row.try_get("published_at").map_err(ser)?,
    })
}
