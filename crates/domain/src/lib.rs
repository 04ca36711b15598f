//! SurveyFlow domain layer.
//!
//! Pure types and rules for the survey form: question descriptors fetched
//! from the question service, the answer map, and the submit-time validation
//! checks. No I/O and no UI concerns live here.

pub mod answers;
pub mod question;
pub mod validation;

pub use answers::{FormAnswers, INITIAL_FIELDS};
pub use question::{FieldKind, QuestionDescriptor, SelectOption};
pub use validation::{
    validate_non_negative, validate_required, ValidationErrors, NON_NEGATIVE_FIELDS,
    NON_NEGATIVE_MESSAGE, REQUIRED_MESSAGE,
};
