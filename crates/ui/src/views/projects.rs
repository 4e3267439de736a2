use dioxus::prelude::*;

use club_core::model::{ProjectCategory, ProjectFilter};

use crate::context::AppContext;
use crate::vm::map_project_card;

#[component]
pub fn ProjectsView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let mut filter = use_signal(ProjectFilter::default);

    let filters: Vec<ProjectFilter> = std::iter::once(ProjectFilter::All)
        .chain(ProjectCategory::ALL.into_iter().map(ProjectFilter::Category))
        .collect();

    let filter_buttons = filters.into_iter().map(|candidate| {
        let active = filter() == candidate;
        let class = if active {
            "btn btn-filter btn-filter--active"
        } else {
            "btn btn-filter"
        };
        rsx! {
            button {
                class: class,
                r#type: "button",
                onclick: move |_| filter.set(candidate),
                "{candidate.label()}"
            }
        }
    });

    let visible = catalog.projects_matching(filter());
    let is_empty = visible.is_empty();
    let project_cards = visible.into_iter().map(|project| {
        let card = map_project_card(project);
        rsx! {
            div { class: "project-card",
                span { class: "project-category", "{card.category_label}" }
                h4 { class: "project-title", "{card.title}" }
                p { class: "project-description", "{card.description}" }
                div { class: "project-tech",
                    for tech in card.technologies.clone() {
                        span { class: "tech-badge", "{tech}" }
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "page projects-page",
            header { class: "view-header",
                h2 { class: "view-title", "Our Projects" }
                p { class: "view-subtitle",
                    "Showcasing innovative solutions built by our talented members"
                }
            }

            div { class: "project-filters",
                {filter_buttons}
            }

            if is_empty {
                p { class: "projects-empty", "No projects found in this category." }
            } else {
                div { class: "project-grid",
                    {project_cards}
                }
            }
        }
    }
}
