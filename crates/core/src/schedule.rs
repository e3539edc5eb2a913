//! Chronological ordering of schedule activities.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{ActivityGroup, ActivityItem};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScheduleError {
    #[error("invalid schedule document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Sort key for a missing or unparseable time slot; always sorts last.
pub const UNPARSED_START: u32 = 9999;

/// Parse the start bound of an `"H:MM - H:MM"` label into minutes since midnight.
///
/// Only the text before the first `-` is considered. Returns
/// [`UNPARSED_START`] when the label is absent or the start bound is not
/// `hours:minutes`.
#[must_use]
pub fn parse_start_time(time_slot: Option<&str>) -> u32 {
    let Some(label) = time_slot else {
        return UNPARSED_START;
    };
    let start = label.split('-').next().unwrap_or_default().trim();
    let mut parts = start.split(':');
    let hours = parts.next().and_then(|h| h.trim().parse::<u32>().ok());
    let minutes = parts.next().and_then(|m| m.trim().parse::<u32>().ok());

    match (hours, minutes) {
        (Some(h), Some(m)) => h
            .checked_mul(60)
            .and_then(|v| v.checked_add(m))
            .unwrap_or(UNPARSED_START),
        _ => UNPARSED_START,
    }
}

/// Stable sort by parsed start time; ties keep their original relative order.
pub fn sort_chronologically(items: &mut [ActivityItem]) {
    items.sort_by_key(ActivityItem::start_minutes);
}

/// The set of activity containers that make up one day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    groups: Vec<ActivityGroup>,
}

impl Schedule {
    #[must_use]
    pub fn new(groups: Vec<ActivityGroup>) -> Self {
        Self { groups }
    }

    /// Parse a schedule document: a JSON array of groups, each with an
    /// optional `heading` and its `items`.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::Parse` if the document is not a valid schedule.
    pub fn from_json(raw: &str) -> Result<Self, ScheduleError> {
        Ok(serde_json::from_str(raw)?)
    }

    #[must_use]
    pub fn groups(&self) -> &[ActivityGroup] {
        &self.groups
    }

    /// Total number of activity items across every group.
    #[must_use]
    pub fn activity_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activity_count() == 0
    }

    /// Reorder every group chronologically in place.
    pub fn order(&mut self) {
        for group in &mut self.groups {
            sort_chronologically(&mut group.items);
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &ActivityItem> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, time: Option<&str>) -> ActivityItem {
        ActivityItem {
            title: Some(title.to_owned()),
            time_slot: time.map(str::to_owned),
            icon: None,
        }
    }

    #[test]
    fn parses_start_bound() {
        assert_eq!(parse_start_time(Some("7:30 - 8:00")), 450);
        assert_eq!(parse_start_time(Some("14:00-15:00")), 840);
        assert_eq!(parse_start_time(Some("0:00 - 0:30")), 0);
        assert_eq!(parse_start_time(Some(" 09:05 ")), 545);
    }

    #[test]
    fn malformed_labels_sort_last() {
        assert_eq!(parse_start_time(None), UNPARSED_START);
        assert_eq!(parse_start_time(Some("")), UNPARSED_START);
        assert_eq!(parse_start_time(Some("mañana")), UNPARSED_START);
        assert_eq!(parse_start_time(Some("7 - 8")), UNPARSED_START);
        assert_eq!(parse_start_time(Some("a:30 - 8:00")), UNPARSED_START);
    }

    #[test]
    fn orders_by_start_time() {
        let mut items = vec![item("Comida", Some("14:00-15:00")), item("Clase", Some("9:00-10:00"))];
        sort_chronologically(&mut items);
        let titles: Vec<_> = items.iter().map(ActivityItem::display_title).collect();
        assert_eq!(titles, ["Clase", "Comida"]);
    }

    #[test]
    fn sort_is_stable_and_unparsed_go_last() {
        let mut items = vec![
            item("Sin hora", None),
            item("B", Some("8:00 - 9:00")),
            item("A", Some("8:00 - 8:30")),
            item("Temprano", Some("6:15 - 6:45")),
        ];
        sort_chronologically(&mut items);
        let titles: Vec<_> = items.iter().map(ActivityItem::display_title).collect();
        assert_eq!(titles, ["Temprano", "B", "A", "Sin hora"]);
    }

    #[test]
    fn document_fields_are_optional() {
        let schedule = Schedule::from_json(
            r#"[{"heading":"Mañana","items":[{"title":"Leer","time":"8:00 - 9:00"},{}]}]"#,
        )
        .unwrap();
        assert_eq!(schedule.activity_count(), 2);
        assert_eq!(schedule.groups()[0].items[1].display_title(), "activity");
        assert!(Schedule::from_json("{\"heading\": 1}").is_err());
    }

    #[test]
    fn order_keeps_items_in_their_group() {
        let mut schedule = Schedule::new(vec![
            ActivityGroup::new("Mañana", vec![item("Tarde", Some("12:00")), item("Pronto", Some("7:00"))]),
            ActivityGroup::new("Noche", vec![item("Cena", Some("21:00"))]),
        ]);
        schedule.order();
        assert_eq!(schedule.groups()[0].items[0].display_title(), "Pronto");
        assert_eq!(schedule.groups()[1].items.len(), 1);
        assert_eq!(schedule.activity_count(), 3);
    }
}
