use crate::error::SummaryError;
use crate::models::{SummaryRequest, SummaryResult};
use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;
use std::cell::RefCell;

/// Status and raw body text as returned by the webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: String,
}

impl WebhookResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound side of a submission. Browser futures are not `Send`.
#[async_trait(?Send)]
pub trait SummaryTransport {
    async fn post_summary(&self, request: &SummaryRequest)
        -> Result<WebhookResponse, SummaryError>;
}

/// Issues exactly one request for `youtube_url` and normalizes the reply.
pub async fn request_summary<T>(
    transport: &T,
    youtube_url: &str,
) -> Result<SummaryResult, SummaryError>
where
    T: SummaryTransport + ?Sized,
{
    let request = SummaryRequest::new(youtube_url);
    info!("Requesting summary for '{youtube_url}'");

    let response = transport.post_summary(&request).await?;
    if !response.ok() {
        warn!("Summary webhook returned HTTP {}", response.status);
        return Err(SummaryError::RequestFailed {
            status: response.status,
        });
    }

    let body: Value = serde_json::from_str(&response.body)?;
    let result = SummaryResult::from_response(&body);
    debug!(
        "Received summary '{}' (video id: {:?})",
        result.title, result.video_id
    );
    Ok(result)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord)]
pub struct SubmissionId(u64);

/// View state for the summarizer page: idle, loading, or resolved with a result or
/// an error. Only the most recently started submission may resolve it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryView {
    url: String,
    loading: bool,
    result: Option<SummaryResult>,
    error: Option<String>,
    last_issued: SubmissionId,
    active: Option<SubmissionId>,
}

impl SummaryView {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&SummaryResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// Enters the loading state and clears whatever the last submission left behind.
    /// Any submission still in flight is superseded.
    pub fn begin_submission(&mut self) -> SubmissionId {
        if let Some(previous) = self.active {
            debug!("Submission {} superseded", previous.0);
        }
        self.last_issued = SubmissionId(self.last_issued.0 + 1);
        self.active = Some(self.last_issued);
        self.loading = true;
        self.result = None;
        self.error = None;
        self.last_issued
    }

    /// Applies the outcome of `id`. Returns false and leaves the view untouched when
    /// `id` is no longer the active submission.
    pub fn finish_submission(
        &mut self,
        id: SubmissionId,
        outcome: Result<SummaryResult, SummaryError>,
    ) -> bool {
        if self.active != Some(id) {
            info!("Discarding stale response for submission {}", id.0);
            return false;
        }

        self.active = None;
        self.loading = false;
        match outcome {
            Ok(result) => self.result = Some(result),
            Err(e) => {
                warn!("Summary submission failed: {e}");
                self.error = Some(e.user_message());
            }
        }
        true
    }
}

/// Runs one submission of the view's current url against `transport`. `on_change` fires
/// after the loading transition and again once the outcome is applied.
pub async fn submit<T, F>(transport: &T, view: &RefCell<SummaryView>, on_change: F) -> SubmissionId
where
    T: SummaryTransport + ?Sized,
    F: Fn(),
{
    let (id, url) = {
        let mut view = view.borrow_mut();
        let id = view.begin_submission();
        (id, view.url().to_string())
    };
    on_change();

    let outcome = request_summary(transport, &url).await;

    if view.borrow_mut().finish_submission(id, outcome) {
        on_change();
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> SummaryResult {
        SummaryResult {
            title: "T".to_string(),
            summary: "S".to_string(),
            description: "D".to_string(),
            video_id: None,
        }
    }

    #[test]
    fn test_begin_clears_previous_outcome() {
        let mut view = SummaryView::default();
        let first = view.begin_submission();
        view.finish_submission(first, Err(SummaryError::RequestFailed { status: 500 }));
        assert!(view.error().is_some());

        let second = view.begin_submission();
        assert!(second > first);
        assert!(view.loading());
        assert!(view.error().is_none());
        assert!(view.result().is_none());
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut view = SummaryView::default();
        let first = view.begin_submission();
        let second = view.begin_submission();

        assert!(!view.finish_submission(first, Ok(sample_result())));
        assert!(view.loading());
        assert!(view.result().is_none());

        assert!(view.finish_submission(second, Ok(sample_result())));
        assert!(!view.loading());
        assert_eq!(view.result(), Some(&sample_result()));
    }

    #[test]
    fn test_finishing_twice_is_ignored() {
        let mut view = SummaryView::default();
        let id = view.begin_submission();

        assert!(view.finish_submission(id, Ok(sample_result())));
        assert!(!view.finish_submission(id, Err(SummaryError::Transport("late".into()))));
        assert!(view.error().is_none());
    }

    #[test]
    fn test_webhook_response_ok_range() {
        let response = |status| WebhookResponse {
            status,
            body: String::new(),
        };
        assert!(response(200).ok());
        assert!(response(204).ok());
        assert!(!response(199).ok());
        assert!(!response(302).ok());
        assert!(!response(500).ok());
    }
}
