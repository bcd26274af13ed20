//! Error types for upstream fetches.

use encore_search::SearchError;
use thiserror::Error;

/// Errors that can occur while fetching from the upstream API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or no response arrived.
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The upstream answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    /// The response body could not be read.
    #[error("could not read response body from {url}: {message}")]
    Body { url: String, message: String },

    /// The response body was not the expected JSON shape.
    #[error("malformed payload from {url}: {message}")]
    Decode { url: String, message: String },

    /// An act carries no link for the requested detail document.
    #[error("act {act:?} has no {link} link")]
    MissingLink { act: String, link: &'static str },

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

impl From<FetchError> for SearchError {
    fn from(err: FetchError) -> Self {
        SearchError::UpstreamUnavailable(err.to_string())
    }
}

/// Convenience alias for fetch results.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
