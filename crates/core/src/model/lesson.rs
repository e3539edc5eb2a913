use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::LessonId;
use crate::model::level::Level;

/// A published community lesson as returned by the contribution service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRecord {
    pub id: LessonId,
    pub title: String,
    pub description: String,
    pub level: Level,
    pub author: String,
    pub content: String,
    pub published_at: DateTime<Utc>,
}
