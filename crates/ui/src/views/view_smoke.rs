use std::sync::Arc;

use aula_core::model::{ActivityItem, LessonId, LessonRecord, Level, ProgressMap};
use aula_core::time::fixed_now;
use chrono::Duration;
use dioxus::prelude::*;
use services::{ContributionError, ContributionService};
use storage::{KeyValueStore, LessonRepository, PROGRESS_KEY, ROTATION_KEY, Storage};

use super::test_harness::{
    ViewKind, drive_dom, setup_view_harness, setup_view_harness_with_service,
};
use crate::views::{ActivityCard, BookCard};
use crate::vm::{ActivityCardVm, BookCardVm};

fn lesson(id: &str, title: &str, days_ago: i64) -> LessonRecord {
    LessonRecord {
        id: LessonId::new(id),
        title: title.to_owned(),
        description: format!("Lección sobre {title}"),
        level: Level::A1,
        author: "Comunidad".into(),
        content: "**Merhaba**".into(),
        published_at: fixed_now() - Duration::days(days_ago),
    }
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("missing {needle} in {html}"))
}

#[tokio::test(flavor = "current_thread")]
async fn checklist_view_renders_authored_order_before_init() {
    let mut harness = setup_view_harness(ViewKind::Checklist, Storage::in_memory(), false);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Consejos diarios"), "missing title in {html}");
    assert!(html.contains("Rutina"), "missing heading in {html}");
    assert!(position(&html, "Comida") < position(&html, "Clase"));
}

#[tokio::test(flavor = "current_thread")]
async fn checklist_view_sorts_and_records_day_after_init() {
    let mut harness = setup_view_harness(ViewKind::Checklist, Storage::in_memory(), false);
    harness.rebuild();
    let html = harness
        .settle_until(|html| html.contains("cursor: pointer"))
        .await;

    assert!(position(&html, "Clase") < position(&html, "Comida"));
    assert!(html.contains("#4f46e5"), "missing pending color in {html}");
    let day = harness.storage.values.get(ROTATION_KEY).await.unwrap();
    assert_eq!(day.as_deref(), Some("Tue Nov 14 2023"));
}

#[tokio::test(flavor = "current_thread")]
async fn checklist_view_restores_completed_activity() {
    let storage = Storage::in_memory();
    let clase = ActivityItem::new("Clase", "9:00-10:00", "fas fa-chalkboard");
    let mut progress = ProgressMap::new();
    progress.toggle(&clase.id(), fixed_now());
    storage
        .values
        .set(PROGRESS_KEY, &serde_json::to_string(&progress).unwrap())
        .await
        .unwrap();

    let mut harness = setup_view_harness(ViewKind::Checklist, storage, false);
    harness.rebuild();
    let html = harness
        .settle_until(|html| html.contains("activity-item completed"))
        .await;

    assert!(html.contains("fas fa-check"), "missing check icon in {html}");
    assert!(html.contains("#22c55e"), "missing completed color in {html}");
    assert!(html.contains("fas fa-utensils"), "pending icon lost in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn clicking_activity_marks_it_completed() {
    let mut harness = setup_view_harness(ViewKind::Checklist, Storage::in_memory(), false);
    harness.rebuild();
    harness
        .settle_until(|html| html.contains("cursor: pointer"))
        .await;
    assert!(!harness.render().contains("activity-item completed"));

    let clase = ActivityItem::new("Clase", "9:00-10:00", "fas fa-chalkboard").id();
    harness.checklist.toggle().call(clase);
    let html = harness
        .settle_until(|html| html.contains("activity-item completed"))
        .await;

    assert!(html.contains("fas fa-check"), "missing check icon in {html}");
    assert!(html.contains("#22c55e"), "missing completed color in {html}");
    let raw = harness.storage.values.get(PROGRESS_KEY).await.unwrap().unwrap();
    assert!(raw.contains("\"9:00-10:00-clase\":{\"completed\":true"), "{raw}");
}

#[tokio::test(flavor = "current_thread")]
async fn back_to_back_clicks_both_stick() {
    let mut harness = setup_view_harness(ViewKind::Checklist, Storage::in_memory(), false);
    harness.rebuild();
    harness
        .settle_until(|html| html.contains("cursor: pointer"))
        .await;

    let toggle = harness.checklist.toggle();
    toggle.call(ActivityItem::new("Clase", "9:00-10:00", "fas fa-chalkboard").id());
    toggle.call(ActivityItem::new("Comida", "14:00-15:00", "fas fa-utensils").id());
    let html = harness
        .settle_until(|html| html.matches("activity-item completed").count() == 2)
        .await;

    assert_eq!(html.matches("activity-item completed").count(), 2, "{html}");
    assert!(!html.contains("fas fa-utensils"), "pending icon left in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn community_view_lists_lessons_newest_first() {
    let storage = Storage::in_memory();
    storage
        .lessons
        .upsert_lesson(&lesson("old", "Números", 5))
        .await
        .unwrap();
    storage
        .lessons
        .upsert_lesson(&lesson("new", "Saludos", 0))
        .await
        .unwrap();

    let mut harness = setup_view_harness(ViewKind::Community, storage, false);
    harness.rebuild();
    let html = harness.settle_until(|html| html.contains("Saludos")).await;

    assert!(position(&html, "Saludos") < position(&html, "Números"));
    assert!(html.contains("Hoy"), "missing relative date in {html}");
    assert!(html.contains("Hace 5 días"), "missing relative date in {html}");
    assert!(html.contains("Ver Lección"), "missing view button in {html}");
    assert!(
        html.contains("/Contribute/?editLesson=new"),
        "missing edit link in {html}"
    );
    assert!(!html.contains("lesson-delete-btn"), "delete shown to visitor in {html}");
    assert!(!html.contains("booksSection"), "books shown for all levels in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn community_view_shows_delete_for_admin() {
    let storage = Storage::in_memory();
    storage
        .lessons
        .upsert_lesson(&lesson("l-1", "Saludos", 1))
        .await
        .unwrap();

    let mut harness = setup_view_harness(ViewKind::Community, storage, true);
    harness.rebuild();
    let html = harness.settle_until(|html| html.contains("Saludos")).await;

    assert!(html.contains("lesson-delete-btn"), "missing delete in {html}");
    assert!(html.contains("Ayer"), "missing relative date in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn community_view_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Community, Storage::in_memory(), false);
    harness.rebuild();
    let html = harness
        .settle_until(|html| html.contains("No hay lecciones encontradas"))
        .await;
    assert!(
        html.contains("No hay lecciones encontradas"),
        "missing empty state in {html}"
    );
    assert!(html.contains("Todos"), "missing level tabs in {html}");
    assert!(html.contains("href=\"/Contribute/\""), "missing contribute link in {html}");
}

struct FailingService;

#[async_trait::async_trait]
impl ContributionService for FailingService {
    async fn published_lessons(&self) -> Result<Vec<LessonRecord>, ContributionError> {
        Err(ContributionError::Forbidden)
    }

    async fn lesson_by_id(&self, _id: &LessonId) -> Result<Option<LessonRecord>, ContributionError> {
        Err(ContributionError::Forbidden)
    }

    async fn delete_contribution(&self, _id: &LessonId) -> Result<(), ContributionError> {
        Err(ContributionError::Forbidden)
    }

    fn is_admin(&self) -> bool {
        false
    }
}

#[tokio::test(flavor = "current_thread")]
async fn community_view_renders_error_state() {
    let mut harness = setup_view_harness_with_service(
        ViewKind::Community,
        Storage::in_memory(),
        Arc::new(FailingService),
    );
    harness.rebuild();
    let html = harness.settle_until(|html| html.contains("Reintentar")).await;
    assert!(html.contains("No se pudo cargar"), "missing error in {html}");
    assert!(html.contains("Reintentar"), "missing retry in {html}");
}

#[derive(Props, Clone, PartialEq)]
struct ActivityCardHost {
    card: ActivityCardVm,
}

#[component]
fn ActivityCardHarness(props: ActivityCardHost) -> Element {
    rsx! {
        ActivityCard { card: props.card, on_toggle: move |_| {} }
    }
}

#[test]
fn static_activity_card_is_not_clickable() {
    let item = ActivityItem::new("Leer", " 8:00 - 9:00 ", "fas fa-book");
    let mut dom = VirtualDom::new_with_props(
        ActivityCardHarness,
        ActivityCardHost {
            card: ActivityCardVm::static_card(&item),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("8:00 - 9:00"), "missing time slot in {html}");
    assert!(html.contains("fas fa-book"), "missing icon in {html}");
    assert!(!html.contains("cursor: pointer"), "static card clickable in {html}");
}

#[derive(Props, Clone, PartialEq)]
struct BookCardHost {
    book: BookCardVm,
}

#[component]
fn BookCardHarness(props: BookCardHost) -> Element {
    rsx! {
        BookCard { book: props.book }
    }
}

#[test]
fn book_card_links_pdf() {
    let book = BookCardVm {
        title: "Turco A1".into(),
        description: "Gramática básica".into(),
        pages_label: "120 páginas".into(),
        size_label: "3.2 MB".into(),
        url: "/books/a1.pdf".into(),
    };
    let mut dom = VirtualDom::new_with_props(BookCardHarness, BookCardHost { book });
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("120 páginas"), "missing pages in {html}");
    assert!(html.contains("href=\"/books/a1.pdf\""), "missing link in {html}");
    assert!(html.contains("Descargar"), "missing download in {html}");
}
