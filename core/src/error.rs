use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    #[error("Webhook responded with HTTP {status}")]
    RequestFailed { status: u16 },

    #[error("Failed to reach the summary webhook: {0}")]
    Transport(String),

    #[error("Failed to parse webhook response: {0}")]
    Parse(String),
}

impl SummaryError {
    /// Text shown in the error banner until the next submission.
    pub fn user_message(&self) -> String {
        format!("Failed to generate summary. Please try again. ({self})")
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(error: serde_json::Error) -> Self {
        SummaryError::Parse(error.to_string())
    }
}
