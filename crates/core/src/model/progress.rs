use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::model::ids::ActivityId;

/// Persisted completion state for one activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEntry {
    #[serde(default)]
    pub completed: bool,
    #[serde(
        default,
        serialize_with = "serialize_timestamp",
        deserialize_with = "deserialize_timestamp"
    )]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ProgressEntry {
    #[must_use]
    pub fn new(completed: bool, at: DateTime<Utc>) -> Self {
        Self {
            completed,
            timestamp: Some(at),
        }
    }
}

// ISO-8601 with millisecond precision and a `Z` suffix, e.g. `2023-11-14T22:13:20.000Z`.
#[allow(clippy::ref_option)]
fn serialize_timestamp<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(at) => serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => serializer.serialize_none(),
    }
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|dt| dt.with_timezone(&Utc)))
}

/// Flat mapping of activity id to completion state, as stored under one key.
///
/// Entries that do not read as a [`ProgressEntry`] are kept verbatim and
/// written back unchanged; they count as not completed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgressMap {
    entries: BTreeMap<ActivityId, ProgressEntry>,
    unreadable: BTreeMap<ActivityId, Value>,
}

impl Serialize for ProgressMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (id, entry) in &self.entries {
            map.serialize_entry(id, entry)?;
        }
        for (id, raw) in &self.unreadable {
            map.serialize_entry(id, raw)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ProgressMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<ActivityId, Value>::deserialize(deserializer)?;
        let mut map = Self::default();
        for (id, value) in raw {
            match ProgressEntry::deserialize(&value) {
                Ok(entry) => {
                    map.entries.insert(id, entry);
                }
                Err(_) => {
                    map.unreadable.insert(id, value);
                }
            }
        }
        Ok(map)
    }
}

impl ProgressMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: &ActivityId) -> Option<&ProgressEntry> {
        self.entries.get(id)
    }

    /// Absent entries count as not completed.
    #[must_use]
    pub fn is_completed(&self, id: &ActivityId) -> bool {
        self.entries.get(id).is_some_and(|e| e.completed)
    }

    /// Flip the completion flag for `id` and stamp it with `now`.
    ///
    /// Returns the new completion flag.
    pub fn toggle(&mut self, id: &ActivityId, now: DateTime<Utc>) -> bool {
        let completed = !self.is_completed(id);
        self.unreadable.remove(id);
        self.entries
            .insert(id.clone(), ProgressEntry::new(completed, now));
        completed
    }

    /// Number of completed entries across the whole mapping, visible or not.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.entries.values().filter(|e| e.completed).count()
    }

    /// Number of stored entries, unreadable ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len() + self.unreadable.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.unreadable.is_empty()
    }
}
