use dioxus::prelude::*;

use crate::vm::{BannerVm, STARTER_DOCUMENT, sanitize_preview};

#[component]
pub fn PlaygroundView() -> Element {
    let mut source = use_signal(|| STARTER_DOCUMENT.to_string());
    let mut banner = use_signal(|| None::<BannerVm>);

    // The only path from typed markup to the preview pane. Raw input never
    // reaches the DOM.
    let preview = sanitize_preview(&source());

    rsx! {
        div { class: "page playground-page",
            header { class: "view-header",
                h2 { class: "view-title", "Live HTML/CSS Editor" }
                p { class: "view-subtitle",
                    "Write HTML and CSS code on the left and see the live preview on the right"
                }
            }

            if let Some(b) = banner() {
                div { class: b.class(),
                    strong { "{b.message}" }
                    span { " {b.detail}" }
                }
            }

            div { class: "playground-split",
                div { class: "playground-editor",
                    div { class: "playground-toolbar",
                        span { class: "playground-label", "Code Editor" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                banner.set(Some(BannerVm::success(
                                    "Code executed successfully!",
                                    "Check the preview on the right",
                                )));
                            },
                            "Run Code"
                        }
                    }
                    textarea {
                        class: "playground-source",
                        placeholder: "Enter your HTML/CSS code here...",
                        value: "{source()}",
                        oninput: move |evt| source.set(evt.value()),
                    }
                }

                div { class: "playground-preview",
                    span { class: "playground-label", "Live Preview" }
                    div {
                        class: "preview-frame",
                        dangerous_inner_html: "{preview}",
                    }
                }
            }
        }
    }
}
