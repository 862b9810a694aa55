//! AuraSense Client Library
//!
//! Thin client for a remote backend that turns YouTube URLs into raw
//! transcripts or AI-generated summaries. Three HTTP calls and one request
//! lifecycle; everything beyond that is presentation.

pub mod client;
pub mod config;
pub mod error;
pub mod surface;
pub mod types;

// Re-export commonly used items at crate root
pub use client::ActionClient;
pub use config::{BACKEND_URL_ENV, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{AurasenseError, Result};
pub use surface::{RequestState, Surface};
pub use types::{
    ActionKind, ActionOutcome, ActionRequest, ErrorBody, HealthStatus, SummarizeResult,
    TranscribeResult,
};
