use aula_core::model::{LessonId, Level, LevelFilter};
use dioxus::prelude::*;
use services::community::RELOAD_DELAY;
use services::{BrowserState, Notice, NoticeKind};
use tracing::warn;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    BookCardVm, LessonCardVm, LessonDetailVm, map_book_cards, map_lesson_cards,
};

const LEVEL_TABS: [(LevelFilter, &str); 6] = [
    (LevelFilter::All, "Todos"),
    (LevelFilter::Only(Level::A1), "A1"),
    (LevelFilter::Only(Level::A2), "A2"),
    (LevelFilter::Only(Level::B1), "B1"),
    (LevelFilter::Only(Level::B2), "B2"),
    (LevelFilter::Only(Level::C1), "C1"),
];

#[component]
pub fn CommunityView() -> Element {
    let ctx = use_context::<AppContext>();
    let community = ctx.community();
    let clock = ctx.clock();

    let mut state = use_signal(BrowserState::default);
    let mut detail = use_signal(|| None::<LessonDetailVm>);
    let mut notice = use_signal(|| None::<Notice>);

    // Only level and search drive the lesson query.
    let query = use_memo(move || {
        let current = state.read();
        BrowserState {
            level: current.level,
            search: current.search.clone(),
            pending_delete: None,
        }
    });

    let community_for_lessons = community.clone();
    let resource = use_resource(move || {
        let community = community_for_lessons.clone();
        let snapshot = query();
        async move {
            let listing = community.lessons(&snapshot).await.map_err(|err| {
                warn!(%err, "could not load lessons");
                ViewError::Unknown
            })?;
            Ok::<_, ViewError>(map_lesson_cards(&listing, clock.now()))
        }
    });

    let community_for_view = community.clone();
    let on_view = use_callback(move |id: LessonId| {
        let community = community_for_view.clone();
        spawn(async move {
            match community.lesson_detail(&id).await {
                Ok(Some(lesson)) => detail.set(Some(LessonDetailVm::new(&lesson, clock.now()))),
                Ok(None) => {}
                Err(err) => warn!(lesson = %id, %err, "could not load lesson"),
            }
        });
    });

    let on_delete = use_callback(move |id: LessonId| {
        state.write().request_delete(id, true);
    });

    let community_for_delete = community.clone();
    let on_confirm_delete = move |_: Event<MouseData>| {
        let community = community_for_delete.clone();
        spawn(async move {
            let mut pending = state.peek().clone();
            state.write().cancel_delete();
            let Some(outcome) = community.confirm_delete(&mut pending).await else {
                return;
            };
            let succeeded = outcome.kind() == NoticeKind::Success;
            show_notice(notice, outcome);
            if succeeded {
                tokio::time::sleep(RELOAD_DELAY).await;
                let mut resource = resource;
                resource.restart();
            }
        });
    };

    let books = map_book_cards(&community.books(&query()));
    let contribute = state.read().contribute_url();
    let search = state.read().search.clone();
    let selected = state.read().level;
    let pending_delete = state.read().pending_delete.is_some();
    let lessons = view_state_from_resource(&resource);

    rsx! {
        div { class: "page community-page",
            header { class: "view-header",
                h2 { class: "view-title", "Lecciones de la comunidad" }
                a { id: "communityCreateBtn", class: "btn btn-primary", href: "{contribute}",
                    i { class: "fas fa-plus" }
                    " Contribuir"
                }
            }
            div { class: "filter-tabs",
                for (filter, label) in LEVEL_TABS {
                    button {
                        class: if filter == selected { "filter-tab active" } else { "filter-tab" },
                        r#type: "button",
                        "data-level": "{filter}",
                        onclick: move |_| state.write().select_level(filter),
                        "{label}"
                    }
                }
            }
            input {
                id: "communitySearch",
                class: "community-search",
                r#type: "search",
                placeholder: "Buscar lecciones...",
                value: "{search}",
                oninput: move |evt| state.write().set_search(evt.value()),
            }

            if !books.is_empty() {
                section { id: "booksSection", class: "books-section",
                    h3 { "Libros" }
                    div { id: "booksGrid", class: "books-grid",
                        for book in books {
                            BookCard { book }
                        }
                    }
                }
            }

            section { id: "lessonsList", class: "lessons-list",
                match lessons {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        p { "Cargando..." }
                    },
                    ViewState::Error(err) => {
                        let message = err.message();
                        rsx! {
                            p { "{message}" }
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| {
                                    let mut resource = resource;
                                    resource.restart();
                                },
                                "Reintentar"
                            }
                        }
                    }
                    ViewState::Ready(cards) => rsx! {
                        if cards.is_empty() {
                            div { class: "empty-state",
                                i { class: "fas fa-book-open" }
                                p { "No hay lecciones encontradas" }
                            }
                        }
                        for card in cards {
                            LessonCard { card, on_view, on_delete }
                        }
                    },
                }
            }

            if let Some(lesson) = detail() {
                LessonModal { detail: lesson, on_close: move |_| detail.set(None) }
            }

            if pending_delete {
                div { id: "deleteConfirmModal", class: "modal", style: "display: flex;",
                    div { class: "modal-content",
                        h3 { "¿Eliminar lección?" }
                        p { "Esta acción no se puede deshacer." }
                        div { class: "modal-actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| state.write().cancel_delete(),
                                "Cancelar"
                            }
                            button {
                                id: "confirmDeleteBtn",
                                class: "btn btn-danger",
                                r#type: "button",
                                onclick: on_confirm_delete,
                                "Eliminar"
                            }
                        }
                    }
                }
            }

            if let Some(current) = notice() {
                NoticeBanner { notice: current, on_dismiss: move |_| notice.set(None) }
            }
        }
    }
}

fn show_notice(mut slot: Signal<Option<Notice>>, next: Notice) {
    slot.set(Some(next.clone()));
    if let Notice::Toast { duration_ms, .. } = next {
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(duration_ms)).await;
            if slot.peek().as_ref() == Some(&next) {
                slot.set(None);
            }
        });
    }
}

#[component]
pub fn BookCard(book: BookCardVm) -> Element {
    rsx! {
        div { class: "book-card",
            div { class: "book-card-content",
                div { class: "book-icon", i { class: "fas fa-file-pdf" } }
                div { class: "book-info",
                    h3 { class: "book-title", "{book.title}" }
                    p { class: "book-description", "{book.description}" }
                    div { class: "book-meta",
                        span { i { class: "fas fa-file-alt" } " {book.pages_label}" }
                        span { i { class: "fas fa-hdd" } " {book.size_label}" }
                    }
                }
            }
            div { class: "book-actions",
                a { class: "book-btn btn-view", href: "{book.url}", target: "_blank",
                    i { class: "fas fa-eye" }
                    " Ver PDF"
                }
                a { class: "book-btn btn-download", href: "{book.url}", download: "",
                    i { class: "fas fa-download" }
                    " Descargar"
                }
            }
        }
    }
}

#[component]
pub fn LessonCard(
    card: LessonCardVm,
    on_view: EventHandler<LessonId>,
    on_delete: EventHandler<LessonId>,
) -> Element {
    let view_id = card.id.clone();
    let delete_id = card.id.clone();

    rsx! {
        div { class: "contribution-card published",
            div { class: "contribution-header",
                div { class: "contribution-type",
                    i { class: "fas fa-book-open" }
                    span { "{card.level_label}" }
                }
                span { class: "contribution-status status-published", "Publicada" }
            }
            h3 { "{card.title}" }
            p { "{card.description}" }
            div { class: "contribution-meta",
                span { i { class: "fas fa-user" } " {card.author}" }
                span { i { class: "fas fa-calendar" } " {card.date_label}" }
            }
            div { class: "lesson-actions",
                button {
                    class: "btn-view-lesson",
                    r#type: "button",
                    onclick: move |_| on_view.call(view_id.clone()),
                    i { class: "fas fa-eye" }
                    " Ver Lección"
                }
                a { class: "lesson-edit-btn", href: "{card.edit_url}",
                    i { class: "fas fa-edit" }
                    " Sugerir Edición"
                }
                if card.can_delete {
                    button {
                        class: "lesson-delete-btn",
                        r#type: "button",
                        title: "Eliminar Lección",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            on_delete.call(delete_id.clone());
                        },
                        i { class: "fas fa-trash" }
                        " Eliminar"
                    }
                }
            }
        }
    }
}

#[component]
fn LessonModal(detail: LessonDetailVm, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { id: "lessonModal", class: "modal", style: "display: flex;",
            div { class: "modal-content",
                div { class: "modal-header",
                    h2 { id: "lessonTitle", "{detail.title}" }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { id: "lessonBody",
                    div { class: "detail-section",
                        h3 { i { class: "fas fa-info-circle" } " Información" }
                        div { class: "detail-grid",
                            div { class: "detail-item", strong { "Nivel:" } span { "{detail.level}" } }
                            div { class: "detail-item", strong { "Autor:" } span { "{detail.author}" } }
                            div { class: "detail-item", strong { "Fecha:" } span { "{detail.date_label}" } }
                        }
                    }
                    div { class: "detail-section",
                        h3 { i { class: "fas fa-book" } " Contenido" }
                        div { class: "lesson-content", dangerous_inner_html: "{detail.content_html}" }
                    }
                }
            }
        }
    }
}

#[component]
fn NoticeBanner(notice: Notice, on_dismiss: EventHandler<()>) -> Element {
    let tone = match notice.kind() {
        NoticeKind::Success => "success",
        NoticeKind::Error => "error",
    };

    match notice {
        Notice::Toast { message, title, .. } => rsx! {
            div { class: "toast toast-{tone}", role: "status",
                strong { class: "toast-title", "{title}" }
                p { class: "toast-message", "{message}" }
            }
        },
        Notice::Alert { message, .. } => rsx! {
            div { class: "modal alert-modal", style: "display: flex;", role: "alertdialog",
                div { class: "modal-content",
                    p { "{message}" }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_dismiss.call(()),
                        "Aceptar"
                    }
                }
            }
        },
    }
}
