use std::sync::Arc;

use dioxus::prelude::*;

use club_core::model::{EventId, EventSignupDraft};

use crate::context::AppContext;
use crate::vm::{BannerVm, map_countdown, map_event_card};

#[component]
pub fn EventsView() -> Element {
    let ctx = use_context::<AppContext>();
    let countdown = ctx.countdown();
    let catalog = ctx.catalog();
    let signups = ctx.signups();

    let mut now = use_signal(|| countdown.clock().now());
    {
        // Re-tick once a second while the view is mounted. The task dies with
        // the view, so no timer outlives the data it reads.
        let countdown = Arc::clone(&countdown);
        use_future(move || {
            let countdown = Arc::clone(&countdown);
            async move {
                loop {
                    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                    now.set(countdown.clock().now());
                }
            }
        });
    }

    let snapshot = countdown.snapshot_at(now());

    let mut signup_target = use_signal(|| None::<u64>);
    let mut banner = use_signal(|| None::<BannerVm>);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut year = use_signal(String::new);
    let mut student_id = use_signal(String::new);
    let mut department = use_signal(String::new);

    let selected_title = signup_target().and_then(|id| {
        catalog
            .event(EventId::new(id))
            .map(|event| event.title().to_string())
    });

    let event_cards = catalog.events().iter().map(|event| {
        let card = map_event_card(event);
        let card_id = card.id;
        let mut signup_target = signup_target;
        let mut banner = banner;
        rsx! {
            div { class: "event-card",
                h4 { class: "event-title", "{card.title}" }
                p { class: "event-when", "{card.date_label} · {card.time_label}" }
                p { class: "event-description", "{card.description}" }
                button {
                    class: "btn btn-primary event-register",
                    r#type: "button",
                    onclick: move |_| {
                        banner.set(None);
                        signup_target.set(Some(card_id));
                    },
                    "Register Now"
                }
            }
        }
    });

    rsx! {
        div { class: "page events-page",
            header { class: "view-header",
                h2 { class: "view-title", "Upcoming Events" }
                p { class: "view-subtitle",
                    "Join us for exciting hackathons, workshops, and coding competitions"
                }
            }

            match snapshot {
                Ok(snap) => {
                    let vm = map_countdown(&snap);
                    rsx! {
                        div { class: "countdown-card",
                            h3 { class: "countdown-heading", "Next Event Starts In" }
                            p { class: "countdown-event", "{vm.title}" }
                            div { class: "countdown-grid",
                                for unit in vm.units.clone() {
                                    div { class: "countdown-unit",
                                        div { class: "countdown-value", "{unit.value}" }
                                        div { class: "countdown-label", "{unit.label}" }
                                    }
                                }
                            }
                        }
                    }
                }
                Err(_) => rsx! {
                    p { class: "events-empty", "No events scheduled right now." }
                },
            }

            if let Some(b) = banner() {
                div { class: b.class(),
                    strong { "{b.message}" }
                    span { " {b.detail}" }
                }
            }

            div { class: "event-grid",
                {event_cards}
            }

            if let Some(event_id) = signup_target() {
                div {
                    class: "modal-overlay",
                    onclick: move |_| signup_target.set(None),
                    div {
                        class: "modal",
                        onclick: move |evt| evt.stop_propagation(),
                        h3 { class: "modal-title",
                            if let Some(title) = selected_title.clone() {
                                "Register for {title}"
                            } else {
                                "Register"
                            }
                        }
                        p { class: "modal-subtitle", "Fill in your details to secure your spot" }

                        label { r#for: "signup-name", "Full Name" }
                        input {
                            id: "signup-name",
                            r#type: "text",
                            value: "{name()}",
                            oninput: move |evt| name.set(evt.value()),
                        }

                        label { r#for: "signup-email", "Email" }
                        input {
                            id: "signup-email",
                            r#type: "email",
                            value: "{email()}",
                            oninput: move |evt| email.set(evt.value()),
                        }

                        div { class: "modal-row",
                            div {
                                label { r#for: "signup-year", "Year" }
                                input {
                                    id: "signup-year",
                                    r#type: "text",
                                    placeholder: "e.g., 2nd Year",
                                    value: "{year()}",
                                    oninput: move |evt| year.set(evt.value()),
                                }
                            }
                            div {
                                label { r#for: "signup-student-id", "Student ID" }
                                input {
                                    id: "signup-student-id",
                                    r#type: "text",
                                    value: "{student_id()}",
                                    oninput: move |evt| student_id.set(evt.value()),
                                }
                            }
                        }

                        label { r#for: "signup-department", "Department" }
                        input {
                            id: "signup-department",
                            r#type: "text",
                            value: "{department()}",
                            oninput: move |evt| department.set(evt.value()),
                        }

                        div { class: "modal-actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| signup_target.set(None),
                                "Cancel"
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: {
                                    let signups = Arc::clone(&signups);
                                    move |_| {
                                        let draft = EventSignupDraft {
                                            name: name(),
                                            email: email(),
                                            year: year(),
                                            student_id: student_id(),
                                            department: department(),
                                        };
                                        match signups.register_for_event(EventId::new(event_id), draft) {
                                            Ok(receipt) => {
                                                banner.set(Some(BannerVm::from_receipt(&receipt)));
                                                signup_target.set(None);
                                                name.set(String::new());
                                                email.set(String::new());
                                                year.set(String::new());
                                                student_id.set(String::new());
                                                department.set(String::new());
                                            }
                                            Err(err) => {
                                                banner.set(Some(BannerVm::from_signup_error(&err)));
                                            }
                                        }
                                    }
                                },
                                "Complete Registration"
                            }
                        }
                    }
                }
            }
        }
    }
}
