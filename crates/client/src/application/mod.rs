pub mod dto;
pub mod session;

pub use dto::SubmissionPayload;
pub use session::{SurveySession, SurveyStep};
