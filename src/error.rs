use thiserror::Error;

/// Failure reported by an image source while serving a search.
///
/// The detail carried here is for logs only; the UI maps every variant to a
/// fixed message (see [`crate::messages`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("no API key configured (set GIPHY_API_KEY or api.key)")]
    MissingApiKey,
    #[error("request timed out")]
    Timeout,
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}
