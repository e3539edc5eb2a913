use std::cell::RefCell;
use std::rc::Rc;

use aula_core::model::ActivityId;
use dioxus::prelude::*;
use services::{ChecklistBoard, readiness};
use tracing::warn;

use crate::context::AppContext;
use crate::vm::ActivityCardVm;

#[derive(Clone, Debug, PartialEq)]
struct GroupVm {
    heading: Option<String>,
    cards: Vec<ActivityCardVm>,
}

#[component]
pub fn ChecklistView() -> Element {
    let ctx = use_context::<AppContext>();
    let checklist = ctx.checklist();
    let authored = ctx.schedule();
    let mut board = use_signal(|| None::<ChecklistBoard>);

    // The waiter is consumed by the first (and only) initialization.
    let (ready, waiter) = use_hook(|| {
        let (ready, waiter) = readiness();
        (ready, Rc::new(RefCell::new(Some(waiter))))
    });

    let checklist_for_init = checklist.clone();
    use_future(move || {
        let checklist = checklist_for_init.clone();
        let waiter = waiter.borrow_mut().take();
        async move {
            let Some(waiter) = waiter else {
                return;
            };
            if let Some(initialized) = checklist.discover_and_initialize(waiter).await {
                board.set(Some(initialized));
            }
        }
    });

    // Markup is on screen once effects run.
    let published = authored.clone();
    use_effect(move || ready.publish(published.clone()));

    let on_toggle = use_callback(move |id: ActivityId| {
        let checklist = checklist.clone();
        spawn(async move {
            let Some(mut scratch) = board.peek().clone() else {
                return;
            };
            match checklist.toggle(&mut scratch, &id).await {
                // Other toggles may have landed while this one awaited storage.
                Ok(Some(outcome)) => {
                    if let Some(live) = board.write().as_mut() {
                        live.set_completed(&id, outcome.completed);
                    }
                }
                Ok(None) => {}
                Err(err) => warn!(activity = %id, %err, "could not save progress"),
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ChecklistTestHandles>() {
                handles.register(on_toggle);
            }
        }
    }

    let groups: Vec<GroupVm> = match board.read().as_ref() {
        Some(board) => board
            .groups()
            .iter()
            .map(|group| GroupVm {
                heading: group.heading.clone(),
                cards: group.activities.iter().map(ActivityCardVm::from).collect(),
            })
            .collect(),
        None => authored
            .groups()
            .iter()
            .map(|group| GroupVm {
                heading: group.heading.clone(),
                cards: group.items.iter().map(ActivityCardVm::static_card).collect(),
            })
            .collect(),
    };

    rsx! {
        div { class: "page consejos-page",
            header { class: "view-header",
                h2 { class: "view-title", "Consejos diarios" }
                p { class: "view-subtitle", "Toca una actividad para marcarla como hecha." }
            }
            div { class: "view-divider" }
            if groups.is_empty() {
                p { class: "empty-state", "No hay actividades para hoy." }
            }
            for group in groups {
                section { class: "schedule-group",
                    if let Some(heading) = group.heading.as_ref() {
                        h3 { class: "schedule-heading", "{heading}" }
                    }
                    div { class: "activities",
                        for card in group.cards {
                            ActivityCard { card, on_toggle }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ChecklistTestHandles {
    toggle: Rc<RefCell<Option<Callback<ActivityId>>>>,
}

#[cfg(test)]
impl ChecklistTestHandles {
    fn register(&self, toggle: Callback<ActivityId>) {
        *self.toggle.borrow_mut() = Some(toggle);
    }

    pub(crate) fn toggle(&self) -> Callback<ActivityId> {
        self.toggle.borrow().clone().expect("toggle registered")
    }
}

/// One schedule entry. The whole card is the click target; the icon never
/// intercepts the click.
#[component]
pub fn ActivityCard(card: ActivityCardVm, on_toggle: EventHandler<ActivityId>) -> Element {
    let id = card.id.clone();
    let interactive = card.interactive;
    let cursor = if interactive { "cursor: pointer;" } else { "" };

    rsx! {
        div {
            class: "{card.item_class}",
            "data-activity-id": "{card.id}",
            style: "{cursor}",
            onclick: move |evt| {
                if interactive {
                    evt.prevent_default();
                    on_toggle.call(id.clone());
                }
            },
            div { class: "{card.icon_class}", style: "{card.icon_style}",
                if let Some(glyph) = card.icon_glyph.as_ref() {
                    i { class: "{glyph}" }
                }
            }
            div { class: "activity-content",
                span { class: "time-slot", "{card.time_label}" }
                h4 { "{card.title}" }
            }
        }
    }
}
