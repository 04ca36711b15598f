//! Reqwest adapter for the question and submission services.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::dto::SubmissionPayload;
use crate::ports::{ApiError, SurveyApiPort};
use surveyflow_domain::QuestionDescriptor;

/// Default question service URL prefix.
pub const DEFAULT_QUESTION_API_URL: &str = "http://localhost:3001/api/questions/";

/// Default submission service URL.
pub const DEFAULT_SUBMIT_API_URL: &str = "http://localhost:3001/api/submit";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the two survey endpoints.
///
/// The question URL is a prefix: the chosen topic is appended verbatim, so
/// both path prefixes (`.../questions/`) and query prefixes
/// (`...?topic=`) work.
#[derive(Clone)]
pub struct SurveyApiClient {
    client: Client,
    question_base_url: String,
    submit_url: String,
}

impl SurveyApiClient {
    pub fn new(question_base_url: &str, submit_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            question_base_url: question_base_url.to_string(),
            submit_url: submit_url.to_string(),
        }
    }

    /// Create the client from environment variables.
    ///
    /// Uses `SURVEY_QUESTION_API_URL` and `SURVEY_SUBMIT_API_URL`, falling
    /// back to local defaults if not set.
    pub fn from_env() -> Self {
        let question_base_url = std::env::var("SURVEY_QUESTION_API_URL")
            .unwrap_or_else(|_| DEFAULT_QUESTION_API_URL.to_string());
        let submit_url = std::env::var("SURVEY_SUBMIT_API_URL")
            .unwrap_or_else(|_| DEFAULT_SUBMIT_API_URL.to_string());
        Self::new(&question_base_url, &submit_url)
    }
}

impl Default for SurveyApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_QUESTION_API_URL, DEFAULT_SUBMIT_API_URL)
    }
}

#[async_trait]
impl SurveyApiPort for SurveyApiClient {
    async fn fetch_questions(&self, topic: &str) -> Result<Vec<QuestionDescriptor>, ApiError> {
        let url = format!("{}{}", self.question_base_url, topic);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::RequestFailed(format!(
                "question service returned {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn submit_survey(&self, payload: SubmissionPayload) -> Result<(), ApiError> {
        let response = self
            .client
            .post(&self.submit_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::RequestFailed(format!(
                "submission service returned {}",
                response.status()
            )));
        }

        // The body is decoded to confirm it is well-formed JSON; its content
        // is not otherwise consumed.
        response
            .json::<serde_json::Value>()
            .await
            .map(|_| ())
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}
