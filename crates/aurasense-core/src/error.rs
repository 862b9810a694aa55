use thiserror::Error;

#[derive(Error, Debug)]
pub enum AurasenseError {
    #[error("Please enter a YouTube URL")]
    EmptyUrl,

    #[error("A request is already in progress")]
    SurfaceBusy,

    #[error("Backend unreachable at {url}: {reason}")]
    BackendUnreachable { url: String, reason: String },

    // Display is the detail alone: callers surface it verbatim.
    #[error("{detail}")]
    RequestFailed { status: u16, detail: String },

    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AurasenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_displays_detail_only() {
        let err = AurasenseError::RequestFailed {
            status: 500,
            detail: "video unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "video unavailable");
    }

    #[test]
    fn empty_url_has_inline_message() {
        assert_eq!(
            AurasenseError::EmptyUrl.to_string(),
            "Please enter a YouTube URL"
        );
    }
}
