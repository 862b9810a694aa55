use tracing::debug;

use crate::{
    client::ActionClient,
    error::{AurasenseError, Result},
    types::{ActionKind, ActionOutcome},
};

/// Lifecycle of the single request a surface may have in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// A UI surface: initiates one class of request at a time and keeps the
/// session-local list of results it has collected, newest first.
///
/// The explicit [`RequestState`] replaces the loading booleans the original
/// front ends scattered across handlers. Both action types on one surface go
/// through the same state, so a summarize submitted while a transcribe is
/// pending is refused, never run concurrently.
#[derive(Debug, Default)]
pub struct Surface {
    state: RequestState,
    results: Vec<ActionOutcome>,
    last_error: Option<String>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == RequestState::Pending
    }

    /// Results collected this session, newest first. Never persisted.
    pub fn results(&self) -> &[ActionOutcome] {
        &self.results
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Run one action through the client.
    ///
    /// Refused while a prior request is pending, and empty input is rejected
    /// before the client is invoked; neither case produces network traffic.
    /// Success and failure both complete through [`Surface::finish`], so the
    /// state can never stay stuck at `Pending`.
    pub async fn submit(
        &mut self,
        client: &ActionClient,
        kind: ActionKind,
        youtube_url: &str,
    ) -> Result<ActionOutcome> {
        if self.is_pending() {
            debug!("submission refused, {} request in flight", kind.label());
            return Err(AurasenseError::SurfaceBusy);
        }
        if youtube_url.is_empty() {
            self.last_error = Some(AurasenseError::EmptyUrl.to_string());
            return Err(AurasenseError::EmptyUrl);
        }

        self.state = RequestState::Pending;
        let result = match kind {
            ActionKind::Transcribe => client
                .transcribe(youtube_url)
                .await
                .map(ActionOutcome::Transcript),
            ActionKind::Summarize => client
                .summarize(youtube_url)
                .await
                .map(ActionOutcome::Summary),
        };
        self.finish(result)
    }

    // Single finalization step for every completed request.
    fn finish(&mut self, result: Result<ActionOutcome>) -> Result<ActionOutcome> {
        match result {
            Ok(outcome) => {
                self.state = RequestState::Succeeded;
                self.last_error = None;
                self.results.insert(0, outcome.clone());
                Ok(outcome)
            }
            Err(err) => {
                // Earlier results stay visible; only the state flips.
                self.state = RequestState::Failed;
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    // Port 9 (discard) is never served locally, so any request that does
    // reach the network fails fast with a connect error.
    fn offline_client() -> ActionClient {
        ActionClient::new(ClientConfig::new("http://127.0.0.1:9")).unwrap()
    }

    #[tokio::test]
    async fn pending_surface_refuses_resubmission() {
        let client = offline_client();
        let mut surface = Surface::new();
        surface.state = RequestState::Pending;

        let err = surface
            .submit(&client, ActionKind::Transcribe, "https://youtu.be/abc123")
            .await
            .unwrap_err();

        assert!(matches!(err, AurasenseError::SurfaceBusy));
        assert_eq!(surface.state(), RequestState::Pending);
    }

    #[tokio::test]
    async fn empty_url_is_rejected_before_the_client() {
        let client = offline_client();
        let mut surface = Surface::new();

        let err = surface
            .submit(&client, ActionKind::Summarize, "")
            .await
            .unwrap_err();

        assert!(matches!(err, AurasenseError::EmptyUrl));
        assert_eq!(surface.state(), RequestState::Idle);
        assert_eq!(surface.last_error(), Some("Please enter a YouTube URL"));
    }

    #[tokio::test]
    async fn transport_failure_clears_pending_and_keeps_results() {
        let client = offline_client();
        let mut surface = Surface::new();

        let err = surface
            .submit(&client, ActionKind::Transcribe, "https://youtu.be/abc123")
            .await
            .unwrap_err();

        assert!(matches!(err, AurasenseError::BackendUnreachable { .. }));
        assert_eq!(surface.state(), RequestState::Failed);
        assert!(surface.results().is_empty());
        assert!(surface.last_error().is_some());

        // The flag is not stuck: the next submission gets past the guard.
        let err = surface
            .submit(&client, ActionKind::Transcribe, "https://youtu.be/abc123")
            .await
            .unwrap_err();
        assert!(matches!(err, AurasenseError::BackendUnreachable { .. }));
    }
}
