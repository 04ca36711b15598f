//! Read-only summary shown after a successful submission.

use dioxus::prelude::*;

use crate::application::session::{SurveySession, FEEDBACK_FIELD, TOPIC_FIELD};

#[component]
pub fn SummaryView(session: Signal<SurveySession>) -> Element {
    let mut session = session;
    let snapshot = session.read().clone();

    let full_name = snapshot.answers.get("fullName").to_string();
    let email = snapshot.answers.get("email").to_string();
    let topic = snapshot.answers.get(TOPIC_FIELD).to_string();
    let feedback = snapshot.answers.get(FEEDBACK_FIELD).to_string();

    rsx! {
        div { class: "summary",
            h2 { class: "summary-title", "Summary of Submitted Data" }
            p {
                strong { "Full Name: " }
                "{full_name}"
            }
            p {
                strong { "Email: " }
                "{email}"
            }
            p {
                strong { "Survey Topic: " }
                "{topic}"
            }
            h3 { class: "summary-subtitle", "Additional Questions:" }
            ul {
                {snapshot.questions.iter().map(|question| {
                    let answer = snapshot.answers.get(&question.name).to_string();
                    rsx! {
                        li { key: "{question.name}",
                            strong { "{question.label}: " }
                            "{answer}"
                        }
                    }
                })}
            }
            p {
                strong { "Feedback: " }
                "{feedback}"
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| session.write().reset(),
                "Submit Another Response"
            }
        }
    }
}
