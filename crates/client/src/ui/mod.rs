//! Dioxus UI for the survey client.

pub mod components;

use dioxus::prelude::*;

use components::SurveyForm;

/// Root component. Expects an `Arc<dyn SurveyApiPort>` in context, provided
/// by the composition root in `main.rs`.
pub fn app() -> Element {
    rsx! {
        div { class: "app-shell",
            div { class: "card",
                h2 { class: "card-title", "Advanced Dynamic Survey" }
                SurveyForm {}
            }
        }
    }
}
