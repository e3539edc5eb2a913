use aula_core::model::{LessonId, LessonRecord};
use chrono::{DateTime, Utc};
use services::community::{LessonListing, edit_url};

use crate::vm::markdown_vm::markdown_to_html;
use crate::vm::time_fmt::format_relative_date;

/// UI-ready representation of a lesson in the community list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCardVm {
    pub id: LessonId,
    pub title: String,
    pub description: String,
    pub level_label: String,
    pub author: String,
    pub date_label: String,
    pub edit_url: String,
    pub can_delete: bool,
}

impl LessonCardVm {
    #[must_use]
    pub fn new(lesson: &LessonRecord, can_delete: bool, now: DateTime<Utc>) -> Self {
        Self {
            id: lesson.id.clone(),
            title: lesson.title.clone(),
            description: lesson.description.clone(),
            level_label: format!("Lección {}", lesson.level),
            author: lesson.author.clone(),
            date_label: format_relative_date(lesson.published_at, now),
            edit_url: edit_url(&lesson.id),
            can_delete,
        }
    }
}

#[must_use]
pub fn map_lesson_cards(listing: &LessonListing, now: DateTime<Utc>) -> Vec<LessonCardVm> {
    listing
        .lessons
        .iter()
        .map(|lesson| LessonCardVm::new(lesson, listing.can_delete, now))
        .collect()
}

/// Content shown in the lesson detail modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonDetailVm {
    pub title: String,
    pub level: String,
    pub author: String,
    pub date_label: String,
    pub content_html: String,
}

impl LessonDetailVm {
    #[must_use]
    pub fn new(lesson: &LessonRecord, now: DateTime<Utc>) -> Self {
        Self {
            title: lesson.title.clone(),
            level: lesson.level.to_string(),
            author: lesson.author.clone(),
            date_label: format_relative_date(lesson.published_at, now),
            content_html: markdown_to_html(&lesson.content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aula_core::model::Level;
    use aula_core::time::fixed_now;
    use chrono::Duration;

    fn lesson() -> LessonRecord {
        LessonRecord {
            id: LessonId::new("l-1"),
            title: "Saludos".into(),
            description: "Cómo saludar".into(),
            level: Level::A1,
            author: "Ana".into(),
            content: "# Merhaba".into(),
            published_at: fixed_now() - Duration::days(3),
        }
    }

    #[test]
    fn delete_visibility_follows_admin_flag() {
        let listing = LessonListing {
            lessons: vec![lesson()],
            can_delete: false,
        };
        let cards = map_lesson_cards(&listing, fixed_now());
        assert!(!cards[0].can_delete);
        assert_eq!(cards[0].level_label, "Lección A1");
        assert_eq!(cards[0].date_label, "Hace 3 días");
        assert_eq!(cards[0].edit_url, "/Contribute/?editLesson=l-1");
    }

    #[test]
    fn detail_renders_content() {
        let detail = LessonDetailVm::new(&lesson(), fixed_now());
        assert!(detail.content_html.contains("<h1>Merhaba</h1>"));
        assert_eq!(detail.level, "A1");
    }
}
