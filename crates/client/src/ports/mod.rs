//! Outbound ports for the survey client.
//!
//! The UI and the session state machine depend on this trait abstraction,
//! not on the concrete reqwest implementation, so the state-machine tests
//! can drive the two network calls through a mock.

use async_trait::async_trait;
use thiserror::Error;

use crate::application::dto::SubmissionPayload;
use surveyflow_domain::QuestionDescriptor;

/// Errors crossing the HTTP boundary.
///
/// Transport failures and non-2xx statuses both land in `RequestFailed`;
/// bodies that cannot be decoded land in `InvalidResponse`. The session
/// collapses either into a single human-readable error string.
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Port for the two survey endpoints.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait SurveyApiPort: Send + Sync {
    /// `GET {question_base_url}{topic}` returning the descriptor sequence
    /// for the chosen topic.
    async fn fetch_questions(&self, topic: &str) -> Result<Vec<QuestionDescriptor>, ApiError>;

    /// `POST {submit_url}` with the merged payload.
    async fn submit_survey(&self, payload: SubmissionPayload) -> Result<(), ApiError>;
}
