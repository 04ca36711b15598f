//! Survey UI components.
//!
//! `Field` is the stateless leaf renderer; `SurveyForm` owns the session
//! and drives the flow; `SummaryView` is the read-only end state.

mod field;
mod form;
mod summary;

pub use field::{Field, FieldProps};
pub use form::SurveyForm;
pub use summary::SummaryView;
