use std::time::Duration;

pub const BACKEND_URL_ENV: &str = "AURASENSE_BACKEND_URL";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Summarization of long videos can take a while.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Backend address and transport settings, resolved once at startup and
/// injected into [`crate::ActionClient`]. Call sites never branch on
/// platform or environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Resolve the backend address: an explicit value if given, else the
    /// `AURASENSE_BACKEND_URL` environment variable, else localhost.
    pub fn resolve(explicit: Option<String>) -> Self {
        let base_url = explicit
            .or_else(|| std::env::var(BACKEND_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

// Endpoint paths all start with '/', so the base must not end with one.
fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
