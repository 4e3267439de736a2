use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let info = catalog.info().clone();
    let nav = use_navigator();

    rsx! {
        div { class: "page home-page",
            section { class: "hero",
                span { class: "hero-badge", "Welcome to {info.name}" }
                h1 { class: "hero-heading", "{info.heading}" }
                p { class: "hero-tagline", "{info.tagline}" }
                p { class: "hero-mission", "{info.mission}" }
                div { class: "hero-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = nav.push(Route::Contact {});
                        },
                        "Join the Club"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = nav.push(Route::Events {});
                        },
                        "View Events"
                    }
                }
                div { class: "hero-stats",
                    for stat in info.stats.clone() {
                        div { class: "hero-stat",
                            div { class: "hero-stat-number", "{stat.number}" }
                            div { class: "hero-stat-label", "{stat.label}" }
                        }
                    }
                }
            }
        }
    }
}
