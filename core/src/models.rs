use crate::video_id::extract_video_id;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const NO_TITLE: &str = "No title available";
pub const NO_SUMMARY: &str = "No summary available";
pub const NO_DESCRIPTION: &str = "No description available";

/// Body posted to the webhook.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SummaryRequest {
    #[serde(rename = "youtubeUrl")]
    pub youtube_url: String,
}

impl SummaryRequest {
    pub fn new(youtube_url: impl Into<String>) -> Self {
        Self {
            youtube_url: youtube_url.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SummaryResult {
    pub title: String,
    /// Markdown, rendered downstream without escaping.
    pub summary: String,
    pub description: String,
    pub video_id: Option<String>,
}

impl SummaryResult {
    /// Normalizes a raw webhook body. Missing, null, empty or non-string fields fall
    /// back to placeholders; `id` may be a bare video id or any YouTube URL.
    pub fn from_response(body: &Value) -> Self {
        Self {
            title: text_field(body, "title").unwrap_or(NO_TITLE).to_string(),
            summary: text_field(body, "summary").unwrap_or(NO_SUMMARY).to_string(),
            description: text_field(body, "description")
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
            video_id: extract_video_id(text_field(body, "id")),
        }
    }
}

fn text_field<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}
