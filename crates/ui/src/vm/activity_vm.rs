use aula_core::model::{ActivityId, ActivityItem};
use services::ActivityState;

pub const COMPLETED_COLOR: &str = "#22c55e";
pub const PENDING_COLOR: &str = "#4f46e5";
pub const CHECK_ICON: &str = "fas fa-check";

/// UI-ready representation of one schedule card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCardVm {
    pub id: ActivityId,
    pub title: String,
    pub time_label: String,
    pub item_class: String,
    pub icon_class: String,
    pub icon_style: String,
    pub icon_glyph: Option<String>,
    pub interactive: bool,
}

impl From<&ActivityState> for ActivityCardVm {
    fn from(state: &ActivityState) -> Self {
        let (background, glyph) = if state.completed {
            (COMPLETED_COLOR, Some(CHECK_ICON.to_owned()))
        } else {
            (PENDING_COLOR, state.original_icon().map(str::to_owned))
        };

        Self {
            id: state.id.clone(),
            title: state.item.display_title().to_owned(),
            time_label: time_label(&state.item),
            item_class: with_completed("activity-item", state.completed),
            icon_class: with_completed("activity-icon", state.completed),
            icon_style: format!("background-color: {background}; pointer-events: none;"),
            icon_glyph: glyph,
            interactive: true,
        }
    }
}

impl ActivityCardVm {
    /// Card for markup that has not been initialized yet: shown as authored, not clickable.
    #[must_use]
    pub fn static_card(item: &ActivityItem) -> Self {
        Self {
            id: item.id(),
            title: item.display_title().to_owned(),
            time_label: time_label(item),
            item_class: "activity-item".to_owned(),
            icon_class: "activity-icon".to_owned(),
            icon_style: String::new(),
            icon_glyph: item.icon.clone(),
            interactive: false,
        }
    }
}

fn time_label(item: &ActivityItem) -> String {
    item.time_slot.as_deref().map(str::trim).unwrap_or_default().to_owned()
}

fn with_completed(base: &str, completed: bool) -> String {
    if completed {
        format!("{base} completed")
    } else {
        base.to_owned()
    }
}
