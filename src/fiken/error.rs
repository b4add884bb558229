//! Fiken client error types.

use thiserror::Error;

/// Result type for Fiken API operations.
pub type FikenResult<T> = Result<T, FikenError>;

/// Errors raised while talking to the Fiken API.
///
/// HTTP error statuses are not errors at this level: the caller gets the
/// status code and body back and decides what to report.
#[derive(Debug, Error)]
pub enum FikenError {
    /// No API key was configured.
    #[error("FIKEN_API_KEY is not set")]
    MissingApiKey,

    /// The request URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Query parameters could not be encoded.
    #[error("encoding query: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// The HTTP client could not be constructed.
    #[error("building HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request failed before a response arrived.
    #[error("executing request: {0}")]
    Request(#[source] reqwest::Error),

    /// The response body could not be read.
    #[error("reading response body: {0}")]
    Body(#[source] reqwest::Error),
}

impl FikenError {
    /// Create an invalid URL error.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }
}
