use std::sync::Arc;

use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{QuizQuestionVm, QuizResultVm, map_quiz_question, map_quiz_result};

#[derive(Clone, Debug, PartialEq)]
enum QuizStage {
    Question(QuizQuestionVm),
    Result(QuizResultVm),
    Unavailable,
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz_flow();
    let mut attempt = use_signal(|| ctx.quiz_flow().start().ok());

    let stage = {
        let guard = attempt.read();
        guard.as_ref().map_or(QuizStage::Unavailable, |a| {
            match map_quiz_question(a) {
                Some(vm) => QuizStage::Question(vm),
                None => a
                    .report()
                    .map(|report| QuizStage::Result(map_quiz_result(&report)))
                    .unwrap_or(QuizStage::Unavailable),
            }
        })
    };

    rsx! {
        div { class: "page quiz-page",
            header { class: "view-header",
                h2 { class: "view-title", "Coding Quiz" }
                p { class: "view-subtitle", "Test your knowledge and track your score in real time" }
            }

            match stage {
                QuizStage::Unavailable => rsx! {
                    p { class: "quiz-empty", "The quiz is unavailable right now." }
                },
                QuizStage::Question(vm) => {
                    let options = vm.options.iter().enumerate().map(|(index, option)| {
                        let selected = vm.selected == Some(index);
                        let class = if selected {
                            "quiz-option quiz-option--selected"
                        } else {
                            "quiz-option"
                        };
                        let label = option.clone();
                        let mut attempt = attempt;
                        rsx! {
                            button {
                                class: class,
                                r#type: "button",
                                onclick: move |_| {
                                    attempt.with_mut(|a| {
                                        if let Some(a) = a.as_mut() {
                                            let _ = a.select_answer(index);
                                        }
                                    });
                                },
                                "{label}"
                            }
                        }
                    });
                    let quiz = Arc::clone(&quiz);
                    rsx! {
                        div { class: "quiz-card",
                            div { class: "quiz-card-header",
                                h3 { class: "quiz-heading", "{vm.heading}" }
                                span { class: "quiz-score", "{vm.score_label}" }
                            }
                            p { class: "quiz-prompt", "{vm.prompt}" }
                            div { class: "quiz-options",
                                {options}
                            }
                            div { class: "quiz-nav",
                                button {
                                    class: "btn btn-secondary",
                                    r#type: "button",
                                    disabled: vm.at_first,
                                    onclick: move |_| {
                                        attempt.with_mut(|a| {
                                            if let Some(a) = a.as_mut() {
                                                let _ = a.go_back();
                                            }
                                        });
                                    },
                                    "Previous"
                                }
                                button {
                                    class: "btn btn-primary",
                                    r#type: "button",
                                    disabled: !vm.can_advance,
                                    onclick: move |_| {
                                        attempt.with_mut(|a| {
                                            if let Some(a) = a.as_mut() {
                                                let _ = a.advance();
                                            }
                                        });
                                        // Record the completed run in the log.
                                        let guard = attempt.read();
                                        if let Some(a) = guard.as_ref() {
                                            if a.is_complete() {
                                                let _ = quiz.finish(a);
                                            }
                                        }
                                    },
                                    "{vm.next_label}"
                                }
                            }
                        }
                    }
                }
                QuizStage::Result(vm) => rsx! {
                    div { class: "quiz-card quiz-card--result",
                        h3 { class: "quiz-result-heading", "Quiz Complete!" }
                        p { class: "quiz-result-score",
                            "You scored "
                            span { class: "quiz-result-number", "{vm.score}" }
                            " out of {vm.total}"
                        }
                        p { class: "quiz-result-feedback", "{vm.feedback}" }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| {
                                attempt.with_mut(|a| {
                                    if let Some(a) = a.as_mut() {
                                        a.reset();
                                    }
                                });
                            },
                            "Retake Quiz"
                        }
                    }
                },
            }
        }
    }
}
