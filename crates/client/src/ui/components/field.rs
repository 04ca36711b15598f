//! Stateless renderer for one form control.

use dioxus::prelude::*;

use surveyflow_domain::{FieldKind, SelectOption};

/// Everything needed to render one control. Validation errors are the
/// form's concern, not this component's.
#[derive(Props, Clone, PartialEq)]
pub struct FieldProps {
    #[props(into)]
    pub label: String,
    pub kind: FieldKind,
    #[props(into)]
    pub name: String,
    #[props(into)]
    pub value: String,
    pub on_change: EventHandler<String>,
    #[props(default)]
    pub required: bool,
    #[props(default)]
    pub options: Vec<SelectOption>,
    #[props(default)]
    pub min_length: Option<i64>,
    #[props(default)]
    pub placeholder_color: Option<String>,
}

/// Renders the control matching `kind`: a dropdown for `select`, a textarea
/// for `textarea`, and a typed `<input>` otherwise.
#[component]
pub fn Field(props: FieldProps) -> Element {
    let FieldProps {
        label,
        kind,
        name,
        value,
        on_change,
        required,
        options,
        min_length,
        placeholder_color,
    } = props;

    let style = placeholder_color.map(|color| format!("color: {color};"));
    let minlength = min_length.map(|n| n.to_string());

    rsx! {
        div { class: "form-field",
            label { class: "field-label",
                "{label}"
                if required {
                    span { class: "required-mark", "*" }
                }
            }
            match kind {
                FieldKind::Select => rsx! {
                    select {
                        class: "field-control",
                        name: "{name}",
                        value: "{value}",
                        required: required,
                        onchange: move |e| on_change.call(e.value()),
                        for opt in options.iter() {
                            option { value: "{opt.value}", "{opt.text}" }
                        }
                    }
                },
                FieldKind::Textarea => rsx! {
                    textarea {
                        class: "field-control field-textarea",
                        name: "{name}",
                        value: "{value}",
                        required: required,
                        minlength,
                        placeholder: "{label}",
                        style,
                        oninput: move |e| on_change.call(e.value()),
                    }
                },
                _ => rsx! {
                    input {
                        r#type: kind.as_str(),
                        class: "field-control",
                        name: "{name}",
                        value: "{value}",
                        required: required,
                        minlength,
                        placeholder: "{label}",
                        style,
                        oninput: move |e| on_change.call(e.value()),
                    }
                },
            }
        }
    }
}
