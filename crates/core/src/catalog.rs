//! Filtering and ordering for the community page listings.

use crate::model::{BookRecord, LessonRecord, LevelFilter, books_for_level};

/// Case-insensitive substring query. An empty query matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery(String);

impl SearchQuery {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn matches_any(&self, fields: &[&str]) -> bool {
        self.0.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&self.0))
    }
}

/// Lessons at the selected level that match the query, newest first.
#[must_use]
pub fn filter_lessons(
    lessons: Vec<LessonRecord>,
    filter: LevelFilter,
    query: &SearchQuery,
) -> Vec<LessonRecord> {
    let mut visible: Vec<LessonRecord> = lessons
        .into_iter()
        .filter(|l| filter.matches(l.level))
        .filter(|l| query.matches_any(&[l.title.as_str(), l.description.as_str(), l.author.as_str()]))
        .collect();
    visible.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    visible
}

/// Books for the selected level that match the query.
///
/// Books are only listed for a specific level; `LevelFilter::All` yields none.
#[must_use]
pub fn filter_books(filter: LevelFilter, query: &SearchQuery) -> Vec<BookRecord> {
    let Some(level) = filter.level() else {
        return Vec::new();
    };
    books_for_level(level)
        .iter()
        .filter(|b| query.matches_any(&[b.title, b.description]))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LessonId, Level};
    use crate::time::fixed_now;
    use chrono::Duration;

    fn lesson(id: &str, level: Level, title: &str, author: &str, days_ago: i64) -> LessonRecord {
        LessonRecord {
            id: LessonId::new(id),
            title: title.to_owned(),
            description: format!("Descripción de {title}"),
            level,
            author: author.to_owned(),
            content: String::new(),
            published_at: fixed_now() - Duration::days(days_ago),
        }
    }

    #[test]
    fn filters_by_level_and_sorts_newest_first() {
        let lessons = vec![
            lesson("1", Level::A1, "Saludos", "Ana", 5),
            lesson("2", Level::B1, "Subjuntivo", "Luis", 1),
            lesson("3", Level::A1, "Números", "Eva", 0),
        ];
        let visible = filter_lessons(lessons, LevelFilter::Only(Level::A1), &SearchQuery::default());
        let ids: Vec<_> = visible.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["3", "1"]);
    }

    #[test]
    fn search_covers_title_description_and_author() {
        let lessons = vec![
            lesson("1", Level::A1, "Saludos", "Ana", 5),
            lesson("2", Level::B1, "Subjuntivo", "Luis", 1),
        ];
        let by_author = filter_lessons(lessons.clone(), LevelFilter::All, &SearchQuery::new("LUIS"));
        assert_eq!(by_author.len(), 1);
        let by_description =
            filter_lessons(lessons, LevelFilter::All, &SearchQuery::new("descripción de sal"));
        assert_eq!(by_description[0].id.as_str(), "1");
    }

    #[test]
    fn books_hidden_for_all_levels() {
        assert!(filter_books(LevelFilter::All, &SearchQuery::default()).is_empty());
        assert_eq!(
            filter_books(LevelFilter::Only(Level::B2), &SearchQuery::default()).len(),
            1
        );
        assert!(filter_books(LevelFilter::Only(Level::B2), &SearchQuery::new("zzz")).is_empty());
        assert_eq!(
            filter_books(LevelFilter::Only(Level::A1), &SearchQuery::new("oficial")).len(),
            1
        );
    }
}
