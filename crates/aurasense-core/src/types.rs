use serde::{Deserialize, Serialize};

/// Request body for both POST endpoints. The URL is passed through verbatim;
/// format validation and video-id extraction happen on the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRequest {
    pub youtube_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscribeResult {
    pub video_id: String,
    pub transcript: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeResult {
    pub video_id: String,
    pub summary: String,
    /// Some backend builds include the source transcript alongside the summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Payload the backend attaches to non-2xx responses. The field is optional
/// and the body may not parse at all; both cases fall back to a generic
/// status-code message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

/// The two actions a surface can trigger against the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Transcribe,
    Summarize,
}

impl ActionKind {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ActionKind::Transcribe => "/transcribe",
            ActionKind::Summarize => "/summarize",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Transcribe => "transcript",
            ActionKind::Summarize => "summary",
        }
    }
}

/// A completed action, as a surface keeps it in its session result list.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Transcript(TranscribeResult),
    Summary(SummarizeResult),
}

impl ActionOutcome {
    pub fn video_id(&self) -> &str {
        match self {
            ActionOutcome::Transcript(t) => &t.video_id,
            ActionOutcome::Summary(s) => &s.video_id,
        }
    }

    /// The display text of the outcome: the raw transcript or the summary.
    pub fn text(&self) -> &str {
        match self {
            ActionOutcome::Transcript(t) => &t.transcript,
            ActionOutcome::Summary(s) => &s.summary,
        }
    }
}
