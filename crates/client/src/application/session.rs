//! Survey session state machine.
//!
//! `SurveySession` owns every piece of mutable form state: the answer map,
//! the current step, the fetched question schema, the error string, and the
//! in-flight flags. UI components hold a `Signal<SurveySession>`, start a
//! network call with `begin_fetch`/`begin_submit`, and feed the result back
//! through `finish_fetch`/`finish_submit`. Keeping the transitions here,
//! behind the `SurveyApiPort` abstraction, lets the tests drive the whole
//! flow without a UI or a live service.

use surveyflow_domain::{
    validate_non_negative, validate_required, FormAnswers, QuestionDescriptor, ValidationErrors,
    NON_NEGATIVE_FIELDS,
};

use crate::application::dto::SubmissionPayload;
use crate::ports::ApiError;

/// Answer key of the topic select on step 1.
pub const TOPIC_FIELD: &str = "surveyTopic";
/// Answer key of the fixed feedback textarea on step 2.
pub const FEEDBACK_FIELD: &str = "feedback";

/// Which page of the form is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyStep {
    /// Identity fields plus the topic select.
    One,
    /// Dynamic questions plus the fixed feedback field.
    Two,
}

/// All mutable state of one survey session.
///
/// Created fresh per run; lives until an explicit reset. The summary view
/// and the form view are mutually exclusive (`show_summary`), and `step`
/// only reaches `Two` once `questions` is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveySession {
    pub step: SurveyStep,
    pub answers: FormAnswers,
    pub questions: Vec<QuestionDescriptor>,
    pub error: Option<String>,
    pub field_errors: ValidationErrors,
    pub submitting: bool,
    pub fetching: bool,
    pub show_summary: bool,
}

impl Default for SurveySession {
    fn default() -> Self {
        Self::new()
    }
}

impl SurveySession {
    pub fn new() -> Self {
        Self {
            step: SurveyStep::One,
            answers: FormAnswers::initial(),
            questions: Vec::new(),
            error: None,
            field_errors: ValidationErrors::new(),
            submitting: false,
            fetching: false,
            show_summary: false,
        }
    }

    /// Update exactly one answer key, leaving all others untouched.
    pub fn set_answer(&mut self, name: &str, value: impl Into<String>) {
        self.answers.set(name, value);
    }

    pub fn topic(&self) -> &str {
        self.answers.get(TOPIC_FIELD)
    }

    /// "Next" is a no-op without a chosen topic, off step 1, or while a
    /// fetch is already in flight.
    pub fn can_advance(&self) -> bool {
        self.step == SurveyStep::One && !self.topic().is_empty() && !self.fetching
    }

    /// Start the question fetch. Returns the topic to query, or `None` when
    /// the transition is gated off.
    pub fn begin_fetch(&mut self) -> Option<String> {
        if !self.can_advance() {
            return None;
        }
        self.fetching = true;
        tracing::debug!(topic = self.topic(), "fetching additional questions");
        Some(self.topic().to_string())
    }

    /// Apply the outcome of a question fetch started with `begin_fetch`.
    ///
    /// A non-empty descriptor set advances to step 2 and clears the error;
    /// an empty set is stored without transitioning; a failure keeps the
    /// session on step 1 with the error string set.
    pub fn finish_fetch(&mut self, result: Result<Vec<QuestionDescriptor>, ApiError>) {
        match result {
            Ok(questions) => {
                tracing::info!(count = questions.len(), "fetched additional questions");
                let advance = !questions.is_empty();
                self.questions = questions;
                if advance {
                    self.step = SurveyStep::Two;
                    self.error = None;
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch additional questions");
                self.error = Some(format!("Failed to fetch additional questions: {err}"));
            }
        }
        self.fetching = false;
    }

    /// "Previous": unconditional step-back that keeps questions and answers.
    pub fn previous(&mut self) {
        if self.step == SurveyStep::Two {
            self.step = SurveyStep::One;
        }
    }

    /// Required-field and non-negative checks for step 2: every dynamic
    /// question name plus `feedback` must be answered, and numeric fields
    /// among the rendered questions must not be negative.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = validate_required(
            self.questions
                .iter()
                .map(|q| q.name.as_str())
                .chain([FEEDBACK_FIELD]),
            &self.answers,
        );
        let numeric = NON_NEGATIVE_FIELDS
            .iter()
            .copied()
            .filter(|field| self.questions.iter().any(|q| q.name == *field));
        errors.extend(validate_non_negative(numeric, &self.answers));
        errors
    }

    /// Static answers merged with dynamic answers, plus the descriptor list
    /// the service sent.
    pub fn payload(&self) -> SubmissionPayload {
        SubmissionPayload {
            form_data: self.answers.clone(),
            additional_questions: self.questions.clone(),
        }
    }

    /// Start the submission. Runs validation first: a non-empty error map
    /// blocks the attempt and is kept for per-field rendering. Returns the
    /// merged payload to POST, or `None` when blocked or already submitting.
    pub fn begin_submit(&mut self) -> Option<SubmissionPayload> {
        if self.submitting {
            return None;
        }
        let errors = self.validate();
        if !errors.is_empty() {
            tracing::debug!(fields = errors.len(), "validation blocked submission");
            self.field_errors = errors;
            return None;
        }
        self.field_errors.clear();
        self.submitting = true;
        Some(self.payload())
    }

    /// Apply the outcome of a submission started with `begin_submit`.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                tracing::info!("survey submitted");
                self.show_summary = true;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to submit survey");
                self.error = Some(format!("Failed to submit form: {err}"));
            }
        }
        self.submitting = false;
    }

    /// "Submit another response": back to a fresh session.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
