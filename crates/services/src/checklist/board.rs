use aula_core::model::{ActivityId, ActivityItem, ProgressMap};
use aula_core::schedule::Schedule;

/// An activity wired for toggling: its identity, markup and current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityState {
    pub id: ActivityId,
    pub item: ActivityItem,
    pub completed: bool,
}

impl ActivityState {
    /// Bind an item to its persisted state; absent entries start not completed.
    #[must_use]
    pub fn bind(item: ActivityItem, progress: &ProgressMap) -> Self {
        let id = item.id();
        let completed = progress.is_completed(&id);
        Self {
            id,
            item,
            completed,
        }
    }

    /// Icon glyph recorded from markup, restored when un-completing.
    #[must_use]
    pub fn original_icon(&self) -> Option<&str> {
        self.item.icon.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGroup {
    pub heading: Option<String>,
    pub activities: Vec<ActivityState>,
}

/// The initialized checklist, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChecklistBoard {
    groups: Vec<BoardGroup>,
}

impl ChecklistBoard {
    /// Bind every item of an already ordered schedule.
    #[must_use]
    pub fn bind(schedule: Schedule, progress: &ProgressMap) -> Self {
        let groups = schedule
            .groups()
            .iter()
            .map(|group| BoardGroup {
                heading: group.heading.clone(),
                activities: group
                    .items
                    .iter()
                    .cloned()
                    .map(|item| ActivityState::bind(item, progress))
                    .collect(),
            })
            .collect();
        Self { groups }
    }

    #[must_use]
    pub fn groups(&self) -> &[BoardGroup] {
        &self.groups
    }

    pub fn activities(&self) -> impl Iterator<Item = &ActivityState> {
        self.groups.iter().flat_map(|g| g.activities.iter())
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.activities.len()).sum()
    }

    #[must_use]
    pub fn contains(&self, id: &ActivityId) -> bool {
        self.activities().any(|a| &a.id == id)
    }

    #[must_use]
    pub fn is_completed(&self, id: &ActivityId) -> Option<bool> {
        self.activities().find(|a| &a.id == id).map(|a| a.completed)
    }

    /// Apply a completion flag to every activity sharing `id`.
    pub fn set_completed(&mut self, id: &ActivityId, completed: bool) {
        for activity in self
            .groups
            .iter_mut()
            .flat_map(|g| g.activities.iter_mut())
            .filter(|a| &a.id == id)
        {
            activity.completed = completed;
        }
    }
}

/// Aggregate completion count for the progress hook.
///
/// `completed` counts every completed entry in storage, including entries
/// for activities that are not on the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
}

impl ProgressSummary {
    /// `None` when there are no activities to count against.
    #[must_use]
    pub fn compute(total: usize, progress: &ProgressMap) -> Option<Self> {
        (total > 0).then(|| Self {
            completed: progress.completed_count(),
            total,
        })
    }
}
