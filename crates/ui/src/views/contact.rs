use std::sync::Arc;

use dioxus::prelude::*;

use club_core::model::{MembershipDraft, NewsletterDraft};

use crate::context::AppContext;
use crate::vm::BannerVm;

#[component]
pub fn ContactView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let signups = ctx.signups();
    let info = catalog.info().clone();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut department = use_signal(String::new);
    let mut year = use_signal(String::new);
    let mut reason = use_signal(String::new);
    let mut member_banner = use_signal(|| None::<BannerVm>);

    let mut newsletter = use_signal(String::new);
    let mut newsletter_banner = use_signal(|| None::<BannerVm>);

    let submit_membership = {
        let signups = Arc::clone(&signups);
        move |_: MouseEvent| {
            let draft = MembershipDraft {
                name: name(),
                email: email(),
                department: department(),
                year: year(),
                reason: reason(),
            };
            match signups.register_member(draft) {
                Ok(receipt) => {
                    member_banner.set(Some(BannerVm::from_receipt(&receipt)));
                    name.set(String::new());
                    email.set(String::new());
                    department.set(String::new());
                    year.set(String::new());
                    reason.set(String::new());
                }
                Err(err) => {
                    member_banner.set(Some(BannerVm::from_signup_error(&err)));
                }
            }
        }
    };

    let submit_newsletter = {
        let signups = Arc::clone(&signups);
        move |_: MouseEvent| {
            let draft = NewsletterDraft {
                email: newsletter(),
            };
            match signups.subscribe(draft) {
                Ok(receipt) => {
                    newsletter_banner.set(Some(BannerVm::from_receipt(&receipt)));
                    newsletter.set(String::new());
                }
                Err(err) => {
                    newsletter_banner.set(Some(BannerVm::from_signup_error(&err)));
                }
            }
        }
    };

    rsx! {
        div { class: "page contact-page",
            header { class: "view-header",
                h2 { class: "view-title", "Get In Touch" }
                p { class: "view-subtitle", "Join our community or reach out with any questions" }
            }

            div { class: "contact-grid",
                div { class: "contact-form-card",
                    h3 { "Join the {info.name}" }
                    p { class: "card-subtitle", "Fill out the form below to become a member" }

                    if let Some(b) = member_banner() {
                        div { class: b.class(),
                            strong { "{b.message}" }
                            span { " {b.detail}" }
                        }
                    }

                    label { r#for: "member-name", "Full Name *" }
                    input {
                        id: "member-name",
                        r#type: "text",
                        placeholder: "John Doe",
                        value: "{name()}",
                        oninput: move |evt| name.set(evt.value()),
                    }

                    label { r#for: "member-email", "Email Address *" }
                    input {
                        id: "member-email",
                        r#type: "email",
                        placeholder: "john@gmu.ac.in",
                        value: "{email()}",
                        oninput: move |evt| email.set(evt.value()),
                    }

                    div { class: "form-row",
                        div {
                            label { r#for: "member-department", "Department *" }
                            input {
                                id: "member-department",
                                r#type: "text",
                                placeholder: "Computer Science",
                                value: "{department()}",
                                oninput: move |evt| department.set(evt.value()),
                            }
                        }
                        div {
                            label { r#for: "member-year", "Year *" }
                            input {
                                id: "member-year",
                                r#type: "text",
                                placeholder: "2nd Year",
                                value: "{year()}",
                                oninput: move |evt| year.set(evt.value()),
                            }
                        }
                    }

                    label { r#for: "member-reason", "Why do you want to join? *" }
                    textarea {
                        id: "member-reason",
                        placeholder: "Share your motivation and interests...",
                        value: "{reason()}",
                        oninput: move |evt| reason.set(evt.value()),
                    }

                    button {
                        class: "btn btn-primary contact-submit",
                        r#type: "button",
                        onclick: submit_membership,
                        "Submit Registration"
                    }
                }

                div { class: "contact-side",
                    div { class: "contact-info-card",
                        h3 { "Contact Information" }
                        p { class: "card-subtitle", "Reach out to us anytime" }
                        ul { class: "contact-lines",
                            li {
                                span { class: "contact-line-label", "Email" }
                                a { href: "mailto:{info.email}", "{info.email}" }
                            }
                            li {
                                span { class: "contact-line-label", "Phone" }
                                span { "{info.phone}" }
                            }
                            li {
                                span { class: "contact-line-label", "Address" }
                                span { "{info.address_lines[0]}" }
                                span { "{info.address_lines[1]}" }
                            }
                        }
                    }

                    div { class: "newsletter-card",
                        h3 { "Stay Updated" }
                        p { class: "card-subtitle",
                            "Subscribe to our newsletter for latest events and announcements"
                        }

                        if let Some(b) = newsletter_banner() {
                            div { class: b.class(),
                                strong { "{b.message}" }
                                span { " {b.detail}" }
                            }
                        }

                        label { r#for: "newsletter-email", "Email Address" }
                        input {
                            id: "newsletter-email",
                            r#type: "email",
                            placeholder: "your@email.com",
                            value: "{newsletter()}",
                            oninput: move |evt| newsletter.set(evt.value()),
                        }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: submit_newsletter,
                            "Subscribe Now"
                        }
                    }

                    div { class: "hours-card",
                        h3 { "Office Hours" }
                        ul { class: "hours-lines",
                            for row in info.office_hours.clone() {
                                li {
                                    span { class: "hours-days", "{row.days}" }
                                    span { class: "hours-value", "{row.hours}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
