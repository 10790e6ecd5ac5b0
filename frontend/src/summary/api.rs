use async_trait::async_trait;
use gloo_net::http::Request;
use yt_summary_core::{SummaryError, SummaryRequest, SummaryTransport, WebhookResponse};

/// Posts summary requests to the webhook through the browser's fetch.
pub struct GlooTransport {
    webhook_url: String,
}

impl GlooTransport {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl SummaryTransport for GlooTransport {
    async fn post_summary(
        &self,
        request: &SummaryRequest,
    ) -> Result<WebhookResponse, SummaryError> {
        let response = Request::post(&self.webhook_url)
            .json(request)
            .map_err(|e| SummaryError::Transport(format!("Request error: {e}")))?
            .send()
            .await
            .map_err(|e| SummaryError::Transport(format!("Network error: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SummaryError::Transport(format!("Failed to read response: {e}")))?;

        Ok(WebhookResponse { status, body })
    }
}
