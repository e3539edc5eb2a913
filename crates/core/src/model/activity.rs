use serde::{Deserialize, Serialize};

use crate::model::ids::ActivityId;
use crate::schedule::parse_start_time;

/// Title used for identity when an activity has no heading text.
pub const DEFAULT_ACTIVITY_TITLE: &str = "activity";

/// One entry on the daily schedule as it appears in markup.
///
/// Every field is optional because markup can be incomplete; identity and
/// ordering both define what happens when a part is missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivityItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "time")]
    pub time_slot: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl ActivityItem {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        time_slot: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            time_slot: Some(time_slot.into()),
            icon: Some(icon.into()),
        }
    }

    #[must_use]
    pub fn id(&self) -> ActivityId {
        ActivityId::derive(self.time_slot.as_deref(), self.title.as_deref())
    }

    /// Minutes since midnight of the start bound, or the unparsed sentinel.
    #[must_use]
    pub fn start_minutes(&self) -> u32 {
        parse_start_time(self.time_slot.as_deref())
    }

    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_ACTIVITY_TITLE)
    }
}

/// A container of activities. Ordering never moves items between groups.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivityGroup {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub items: Vec<ActivityItem>,
}

impl ActivityGroup {
    #[must_use]
    pub fn new(heading: impl Into<String>, items: Vec<ActivityItem>) -> Self {
        Self {
            heading: Some(heading.into()),
            items,
        }
    }
}
