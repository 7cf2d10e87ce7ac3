use thiserror::Error;

/// Failure of a single request against the translation endpoint.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("connection to {url} failed: {message}")]
    Connection { url: String, message: String },

    #[error("request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    #[error("could not decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Request(String),
}

impl ProbeError {
    /// Maps a reqwest error onto the categories the report distinguishes.
    pub fn from_reqwest(error: reqwest::Error, url: &str, timeout_ms: u64) -> Self {
        Self::classify(
            error.is_connect(),
            error.is_timeout(),
            error.to_string(),
            url,
            timeout_ms,
        )
    }

    /// A timeout while still connecting counts as a connection failure, so
    /// only timeouts on an established connection report as `Timeout`.
    fn classify(
        is_connect: bool,
        is_timeout: bool,
        message: String,
        url: &str,
        timeout_ms: u64,
    ) -> Self {
        if is_connect {
            return ProbeError::Connection {
                url: url.to_string(),
                message,
            };
        }

        if is_timeout {
            return ProbeError::Timeout { timeout_ms };
        }

        ProbeError::Request(message)
    }
}
