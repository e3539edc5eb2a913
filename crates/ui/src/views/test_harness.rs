use std::sync::Arc;

use aula_core::model::{ActivityGroup, ActivityItem};
use aula_core::schedule::Schedule;
use aula_core::time::fixed_now;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{
    ChecklistService, Clock, CommunityBrowser, ContributionService, LocalContributionService,
    NoticeStyle,
};
use storage::{ProgressStore, Storage};

use super::checklist::ChecklistTestHandles;
use crate::context::{UiApp, build_app_context};
use crate::views::{ChecklistView, CommunityView};

#[derive(Clone)]
struct TestApp {
    schedule: Schedule,
    checklist: Arc<ChecklistService>,
    community: Arc<CommunityBrowser>,
}

impl UiApp for TestApp {
    fn clock(&self) -> Clock {
        Clock::fixed(fixed_now())
    }

    fn schedule(&self) -> Schedule {
        self.schedule.clone()
    }

    fn checklist(&self) -> Arc<ChecklistService> {
        Arc::clone(&self.checklist)
    }

    fn community(&self) -> Arc<CommunityBrowser> {
        Arc::clone(&self.community)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Checklist,
    Community,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: ChecklistTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Checklist => rsx! { ChecklistView {} },
        ViewKind::Community => rsx! { CommunityView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub checklist: ChecklistTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive pending work until `done` holds for the rendered html.
    pub async fn settle_until(&mut self, done: impl Fn(&str) -> bool) -> String {
        for _ in 0..20 {
            let html = self.render();
            if done(&html) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Two activities authored out of chronological order.
pub fn sample_schedule() -> Schedule {
    Schedule::new(vec![ActivityGroup::new(
        "Rutina",
        vec![
            ActivityItem::new("Comida", "14:00-15:00", "fas fa-utensils"),
            ActivityItem::new("Clase", "9:00-10:00", "fas fa-chalkboard"),
        ],
    )])
}

pub fn setup_view_harness(view: ViewKind, storage: Storage, admin: bool) -> ViewHarness {
    let service: Arc<dyn ContributionService> = Arc::new(LocalContributionService::new(
        Arc::clone(&storage.lessons),
        admin,
    ));
    setup_view_harness_with_service(view, storage, service)
}

pub fn setup_view_harness_with_service(
    view: ViewKind,
    storage: Storage,
    service: Arc<dyn ContributionService>,
) -> ViewHarness {
    let checklist = Arc::new(ChecklistService::new(
        Clock::fixed(fixed_now()),
        ProgressStore::new(Arc::clone(&storage.values)),
    ));
    let community = Arc::new(CommunityBrowser::new(service, NoticeStyle::Toast));

    let app = Arc::new(TestApp {
        schedule: sample_schedule(),
        checklist,
        community,
    });

    let handles = ChecklistTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        checklist: handles,
    }
}
