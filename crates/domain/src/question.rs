//! Question descriptors supplied at runtime by the question service.

use serde::{Deserialize, Serialize};

/// Control type of a survey field.
///
/// The question service only ever emits these four kinds; any other value in
/// a descriptor makes the body malformed and the fetch fails as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Select,
    Textarea,
}

impl FieldKind {
    /// HTML `type`/tag name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Select => "select",
            FieldKind::Textarea => "textarea",
        }
    }
}

/// One entry of a select control, in service-given order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

/// A form field whose shape is supplied at runtime by the question service.
///
/// Immutable once fetched; the descriptor list is echoed back verbatim in
/// the submission payload and discarded on reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDescriptor {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

impl QuestionDescriptor {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            options: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_service_payload() {
        let body = r#"[
            {
                "name": "favoriteProgrammingLanguage",
                "label": "Favorite Programming Language",
                "type": "select",
                "required": true,
                "options": [
                    { "value": "Rust", "text": "Rust" },
                    { "value": "Go", "text": "Go" }
                ]
            },
            {
                "name": "yearsOfExperience",
                "label": "Years of Experience",
                "type": "text",
                "required": true
            }
        ]"#;

        let questions: Vec<QuestionDescriptor> =
            serde_json::from_str(body).expect("valid descriptor array");

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].kind, FieldKind::Select);
        assert_eq!(questions[0].options.len(), 2);
        assert_eq!(questions[0].options[0].value, "Rust");
        // Missing options defaults to an empty list
        assert_eq!(questions[1].kind, FieldKind::Text);
        assert!(questions[1].options.is_empty());
    }

    #[test]
    fn unknown_kind_is_malformed() {
        let body = r#"[{ "name": "q", "label": "Q", "type": "checkbox" }]"#;
        assert!(serde_json::from_str::<Vec<QuestionDescriptor>>(body).is_err());
    }

    #[test]
    fn descriptors_round_trip_through_json() {
        let question = QuestionDescriptor::new("q1", "Question 1", FieldKind::Textarea).required();
        let json = serde_json::to_value(&question).expect("serializes");
        assert_eq!(json["type"], "textarea");
        assert_eq!(json["required"], true);
        // Empty option lists are omitted from the echo
        assert!(json.get("options").is_none());
    }
}
