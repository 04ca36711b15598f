//! Wire-format DTOs for the submission service.

use serde::Serialize;

use surveyflow_domain::{FormAnswers, QuestionDescriptor};

/// JSON body POSTed to the submission service.
///
/// `form_data` is the merged static + dynamic answer map; the fetched
/// descriptor list rides along so the service can interpret the dynamic
/// keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub form_data: FormAnswers,
    pub additional_questions: Vec<QuestionDescriptor>,
}
