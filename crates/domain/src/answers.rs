//! Answer storage for the survey form.

use std::collections::BTreeMap;

use serde::Serialize;

/// Field identifiers present in a fresh form, before any dynamic questions
/// contribute keys of their own.
pub const INITIAL_FIELDS: &[&str] = &[
    "fullName",
    "email",
    "surveyTopic",
    "favoriteProgrammingLanguage",
    "yearsOfExperience",
    "exerciseFrequency",
    "dietPreference",
    "highestQualification",
    "fieldOfStudy",
    "feedback",
];

/// Mapping from field identifier to the user's answer.
///
/// Keys are the fixed initial set plus any keys contributed by fetched
/// questions. Edits have shallow-merge semantics: setting one key never
/// touches another. Serializes transparently as a JSON object, which is the
/// `formData` half of the submission payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormAnswers {
    values: BTreeMap<String, String>,
}

impl Default for FormAnswers {
    fn default() -> Self {
        Self::initial()
    }
}

impl FormAnswers {
    /// Fresh answer set with every initial field mapped to the empty string.
    pub fn initial() -> Self {
        Self {
            values: INITIAL_FIELDS
                .iter()
                .map(|field| ((*field).to_string(), String::new()))
                .collect(),
        }
    }

    /// Current value for `name`, or the empty string when never set.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    /// True when the field has no answer yet.
    pub fn is_blank(&self, name: &str) -> bool {
        self.get(name).is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
