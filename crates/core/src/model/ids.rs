use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::activity::DEFAULT_ACTIVITY_TITLE;

/// Stable identifier for an activity on the daily schedule.
///
/// Derived from the time-slot text and the title, so the same markup always
/// yields the same id across page loads. Editing either text orphans any
/// progress stored under the previous id.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(String);

impl ActivityId {
    /// Build the id from raw time-slot and title text.
    ///
    /// Both parts are trimmed, a missing title falls back to `"activity"`,
    /// whitespace runs become a single `-`, and the result is lowercased.
    #[must_use]
    pub fn derive(time_slot: Option<&str>, title: Option<&str>) -> Self {
        let time_slot = time_slot.map(str::trim).unwrap_or_default();
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_ACTIVITY_TITLE);

        let joined = format!("{time_slot}-{title}");
        let mut out = String::with_capacity(joined.len());
        let mut in_space = false;
        for ch in joined.chars() {
            if ch.is_whitespace() {
                if !in_space {
                    out.push('-');
                }
                in_space = true;
            } else {
                in_space = false;
                out.extend(ch.to_lowercase());
            }
        }
        Self(out)
    }

    /// Wrap an already-derived id, e.g. one read back from storage.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier assigned to a lesson by the contribution service.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonId(String);

impl LessonId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActivityId({})", self.0)
    }
}

impl fmt::Debug for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonId({})", self.0)
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
