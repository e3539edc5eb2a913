use async_trait::async_trait;
use aula_core::model::{LessonId, LessonRecord};

use super::SqliteRepository;
use super::mapping::{conn, map_lesson_row};
use crate::repository::{LessonRepository, StorageError};

#[async_trait]
impl LessonRepository for SqliteRepository {
    async fn list_published(&self) -> Result<Vec<LessonRecord>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, title, description, level, author, content, published_at
            FROM lessons
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;

        rows.iter().map(map_lesson_row).collect()
    }

    async fn get_lesson(&self, id: &LessonId) -> Result<Option<LessonRecord>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT id, title, description, level, author, content, published_at
            FROM lessons
            WHERE id = ?1
            ",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(conn)?;

        row.as_ref().map(map_lesson_row).transpose()
    }

    async fn upsert_lesson(&self, lesson: &LessonRecord) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO lessons (id, title, description, level, author, content, published_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                description = excluded.description,
                level = excluded.level,
                author = excluded.author,
                content = excluded.content,
                published_at = excluded.published_at
            ",
        )
        .bind(lesson.id.as_str())
        .bind(&lesson.title)
        .bind(&lesson.description)
        .bind(lesson.level.as_str())
        .bind(&lesson.author)
        .bind(&lesson.content)
        .bind(lesson.published_at)
        .execute(&self.pool)
        .await
        .map_err(conn)?;

        Ok(())
    }

    async fn delete_lesson(&self, id: &LessonId) -> Result<(), StorageError> {
        let res = sqlx::query("DELETE FROM lessons WHERE id = ?1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(conn)?;

        if res.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}
