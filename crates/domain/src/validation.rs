//! Submit-time validation checks.
//!
//! Two rules, mirroring what the submission flow enforces: named fields must
//! be answered, and fields on the non-negative list must not hold a negative
//! number. Both produce a field-to-message map rather than a `Result`, so
//! the controller can render every problem at once.

use std::collections::BTreeMap;

use crate::answers::FormAnswers;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const NON_NEGATIVE_MESSAGE: &str = "This field must be a non-negative number";

/// Field identifiers validated as non-negative numbers when they parse as one.
pub const NON_NEGATIVE_FIELDS: &[&str] = &["yearsOfExperience"];

/// Field identifier mapped to a human-readable problem description.
pub type ValidationErrors = BTreeMap<String, String>;

/// Every named field must have a non-empty answer.
pub fn validate_required<'a, I>(fields: I, answers: &FormAnswers) -> ValidationErrors
where
    I: IntoIterator<Item = &'a str>,
{
    let mut errors = ValidationErrors::new();
    for field in fields {
        if answers.is_blank(field) {
            errors.insert(field.to_string(), REQUIRED_MESSAGE.to_string());
        }
    }
    errors
}

/// Named fields must be answered, and an answer that parses as a number must
/// be non-negative. Non-numeric answers only trip the required rule.
pub fn validate_non_negative<'a, I>(fields: I, answers: &FormAnswers) -> ValidationErrors
where
    I: IntoIterator<Item = &'a str>,
{
    let mut errors = ValidationErrors::new();
    for field in fields {
        let value = answers.get(field);
        if value.is_empty() {
            errors.insert(field.to_string(), REQUIRED_MESSAGE.to_string());
        } else if value.trim().parse::<f64>().is_ok_and(|n| n < 0.0) {
            errors.insert(field.to_string(), NON_NEGATIVE_MESSAGE.to_string());
        }
    }
    errors
}
