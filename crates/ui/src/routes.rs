use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{ContactView, EventsView, HomeView, PlaygroundView, ProjectsView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/events", EventsView)] Events {},
        #[route("/projects", ProjectsView)] Projects {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/playground", PlaygroundView)] Playground {},
        #[route("/contact", ContactView)] Contact {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            TopNav {}
            main { class: "content",
                Outlet::<Route> {}
            }
            SiteFooter {}
        }
    }
}

#[component]
fn TopNav() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let info = catalog.info();

    rsx! {
        nav { class: "topnav",
            div { class: "topnav-brand",
                span { class: "topnav-name", "{info.name}" }
                span { class: "topnav-university", "{info.university}" }
            }
            ul { class: "topnav-links",
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Events {}, "Events" } }
                li { Link { to: Route::Projects {}, "Projects" } }
                li { Link { to: Route::Quiz {}, "Quiz" } }
                li { Link { to: Route::Playground {}, "Playground" } }
                li { Link { to: Route::Contact {}, "Join Us" } }
            }
        }
    }
}

#[component]
fn SiteFooter() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let info = catalog.info();
    let socials = info.socials.clone();
    let year = chrono::Datelike::year(&chrono::Utc::now());

    rsx! {
        footer { class: "footer",
            div { class: "footer-grid",
                div { class: "footer-about",
                    h3 { "{info.name}" }
                    p { class: "footer-university", "{info.university}" }
                    p { "{info.footer_blurb}" }
                }
                div { class: "footer-links",
                    h4 { "Quick Links" }
                    ul {
                        li { Link { to: Route::Home {}, "Home" } }
                        li { Link { to: Route::Events {}, "Events" } }
                        li { Link { to: Route::Projects {}, "Projects" } }
                        li { Link { to: Route::Contact {}, "Contact" } }
                    }
                }
                div { class: "footer-contact",
                    h4 { "Contact Us" }
                    ul {
                        li {
                            a { href: "mailto:{info.email}", "{info.email}" }
                        }
                        li { "{info.phone}" }
                        li { "{info.address_lines[0]}" }
                        li { "{info.address_lines[1]}" }
                    }
                }
                div { class: "footer-social",
                    h4 { "Connect With Us" }
                    ul {
                        for social in socials {
                            li {
                                a { href: "{social.url}", "{social.label}" }
                            }
                        }
                    }
                    a { class: "footer-discord", href: "{info.discord_url}", "Join Discord" }
                }
            }
            div { class: "footer-bottom",
                p { "© {year} {info.name}. All rights reserved." }
            }
        }
    }
}
