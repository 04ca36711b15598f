//! Multi-step survey form controller component.
//!
//! Owns the `SurveySession` signal and drives the two network calls through
//! the `SurveyApiPort` found in context. Step 1 renders the identity fields
//! and the topic select; step 2 renders the fetched questions plus the
//! fixed feedback field; a successful submission swaps in the summary view.

use std::sync::Arc;

use dioxus::prelude::*;

use surveyflow_domain::{FieldKind, SelectOption};

use super::field::Field;
use super::summary::SummaryView;
use crate::application::session::{SurveySession, SurveyStep, FEEDBACK_FIELD, TOPIC_FIELD};
use crate::ports::SurveyApiPort;

/// Minimum feedback length enforced on the textarea control.
pub const FEEDBACK_MIN_LENGTH: i64 = 50;

fn topic_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("", "Select a topic"),
        SelectOption::new("Technology", "Technology"),
        SelectOption::new("Health", "Health"),
        SelectOption::new("Education", "Education"),
    ]
}

#[component]
pub fn SurveyForm() -> Element {
    let api = use_context::<Arc<dyn SurveyApiPort>>();
    let mut session = use_signal(SurveySession::new);

    let snapshot = session.read().clone();

    let api_next = api.clone();
    let on_next = move |_| {
        let Some(topic) = session.write().begin_fetch() else {
            return;
        };
        let api = api_next.clone();
        spawn(async move {
            let result = api.fetch_questions(&topic).await;
            session.write().finish_fetch(result);
        });
    };

    let api_submit = api.clone();
    let on_submit = move |_| {
        let Some(payload) = session.write().begin_submit() else {
            return;
        };
        let api = api_submit.clone();
        spawn(async move {
            let result = api.submit_survey(payload).await;
            session.write().finish_submit(result);
        });
    };

    if snapshot.show_summary {
        return rsx! {
            SummaryView { session }
        };
    }

    rsx! {
        div { class: "survey-form",
            if snapshot.step == SurveyStep::One {
                Field {
                    label: "Full Name",
                    kind: FieldKind::Text,
                    name: "fullName",
                    value: snapshot.answers.get("fullName"),
                    required: true,
                    on_change: move |value: String| session.write().set_answer("fullName", value),
                }
                Field {
                    label: "Email",
                    kind: FieldKind::Email,
                    name: "email",
                    value: snapshot.answers.get("email"),
                    required: true,
                    on_change: move |value: String| session.write().set_answer("email", value),
                }
                Field {
                    label: "Survey Topic",
                    kind: FieldKind::Select,
                    name: TOPIC_FIELD,
                    value: snapshot.topic(),
                    required: true,
                    options: topic_options(),
                    on_change: move |value: String| session.write().set_answer(TOPIC_FIELD, value),
                }
                button {
                    class: "btn btn-primary",
                    disabled: snapshot.fetching,
                    onclick: on_next,
                    if snapshot.fetching { "Loading..." } else { "Next" }
                }
            }
            if snapshot.step == SurveyStep::Two {
                {snapshot.questions.iter().map(|question| {
                    let name = question.name.clone();
                    let error = snapshot.field_errors.get(&question.name).cloned();
                    rsx! {
                        Field {
                            key: "{question.name}",
                            label: question.label.clone(),
                            kind: question.kind,
                            name: question.name.clone(),
                            value: snapshot.answers.get(&question.name),
                            required: question.required,
                            options: question.options.clone(),
                            on_change: move |value: String| session.write().set_answer(&name, value),
                        }
                        if let Some(message) = error {
                            p { class: "field-error", "{message}" }
                        }
                    }
                })}
                Field {
                    label: "Feedback",
                    kind: FieldKind::Textarea,
                    name: FEEDBACK_FIELD,
                    value: snapshot.answers.get(FEEDBACK_FIELD),
                    required: true,
                    min_length: Some(FEEDBACK_MIN_LENGTH),
                    on_change: move |value: String| session.write().set_answer(FEEDBACK_FIELD, value),
                }
                if let Some(message) = snapshot.field_errors.get(FEEDBACK_FIELD) {
                    p { class: "field-error", "{message}" }
                }
                div { class: "button-row",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| session.write().previous(),
                        "Previous"
                    }
                    button {
                        class: "btn btn-submit",
                        disabled: snapshot.submitting,
                        onclick: on_submit,
                        if snapshot.submitting { "Submitting..." } else { "Submit" }
                    }
                }
            }
            if let Some(error) = snapshot.error.as_ref() {
                div { class: "form-error", "{error}" }
            }
        }
    }
}
