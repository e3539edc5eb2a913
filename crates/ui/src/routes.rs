use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{ChecklistView, CommunityView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ChecklistView)] Checklist {},
        #[route("/community", CommunityView)] Community {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Aula" }
            ul {
                li { Link { to: Route::Checklist {}, "Consejos" } }
                li { Link { to: Route::Community {}, "Comunidad" } }
            }
        }
    }
}
