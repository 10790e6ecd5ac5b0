//! Platform-independent pieces of the YouTube summarizer: video id extraction,
//! webhook response normalization, the submission lifecycle and markdown rendering.

pub mod config;
pub mod error;
pub mod markdown;
pub mod models;
pub mod submission;
pub mod video_id;

pub use config::AppConfig;
pub use error::SummaryError;
pub use models::{SummaryRequest, SummaryResult};
pub use submission::{
    request_summary, submit, SubmissionId, SummaryTransport, SummaryView, WebhookResponse,
};
pub use video_id::extract_video_id;
