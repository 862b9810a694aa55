use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    config::ClientConfig,
    error::{AurasenseError, Result},
    types::{ActionKind, ActionRequest, ErrorBody, HealthStatus, SummarizeResult, TranscribeResult},
};

/// HTTP client for the AuraSense backend.
///
/// One request per invocation: no retries, no streaming, no cancellation.
/// Every failure is normalized into a display-ready [`AurasenseError`].
pub struct ActionClient {
    http: Client,
    base_url: String,
}

impl ActionClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/health`. A transport failure is reported as a generic
    /// unreachable condition and never retried.
    pub async fn check_health(&self) -> Result<HealthStatus> {
        let url = format!("{}/health", self.base_url);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| unreachable_error(&url, e))?;
        let response = check_status(response).await?;

        Ok(response.json::<HealthStatus>().await?)
    }

    /// `POST {base}/transcribe` with body `{ youtube_url }`.
    pub async fn transcribe(&self, youtube_url: &str) -> Result<TranscribeResult> {
        self.post_action(ActionKind::Transcribe, youtube_url).await
    }

    /// `POST {base}/summarize`, identical contract to [`Self::transcribe`].
    pub async fn summarize(&self, youtube_url: &str) -> Result<SummarizeResult> {
        self.post_action(ActionKind::Summarize, youtube_url).await
    }

    async fn post_action<T: DeserializeOwned>(
        &self,
        kind: ActionKind,
        youtube_url: &str,
    ) -> Result<T> {
        // Rejected before any network traffic.
        if youtube_url.is_empty() {
            return Err(AurasenseError::EmptyUrl);
        }

        let url = format!("{}{}", self.base_url, kind.endpoint());
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(&ActionRequest {
                youtube_url: youtube_url.to_string(),
            })
            .send()
            .await
            .map_err(|e| unreachable_error(&url, e))?;
        let response = check_status(response).await?;

        Ok(response.json::<T>().await?)
    }
}

// reqwest send() errors mean no response was received (connect failure,
// timeout, bad address). Anything after that is a decode error.
fn unreachable_error(url: &str, err: reqwest::Error) -> AurasenseError {
    warn!("no response from {}: {}", url, err);
    AurasenseError::BackendUnreachable {
        url: url.to_string(),
        reason: err.to_string(),
    }
}

/// Pass 2xx responses through; turn everything else into [`AurasenseError::RequestFailed`]
/// with the body's `detail` when parseable, else `Status {code}`.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        debug!("response {}", status.as_u16());
        return Ok(response);
    }

    let detail = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
        .and_then(|body| body.detail)
        .unwrap_or_else(|| format!("Status {}", status.as_u16()));

    warn!("request rejected ({}): {}", status.as_u16(), detail);
    Err(AurasenseError::RequestFailed {
        status: status.as_u16(),
        detail,
    })
}
