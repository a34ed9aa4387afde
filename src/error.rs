use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single GitHub API request.
///
/// `Transport` covers connection errors and malformed JSON bodies (both
/// surface as `reqwest::Error`); `Status` is a response that arrived but
/// was not 2xx, rate-limit responses included.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("github returned HTTP {0}")]
    Status(StatusCode),
}
