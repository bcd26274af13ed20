//! Error types for search operations.

use thiserror::Error;

/// Errors surfaced by [`SearchService`](crate::SearchService).
///
/// Matching itself never fails; every variant aborts the whole search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The raw query yielded no usable search term.
    #[error("invalid search term: {0}")]
    InvalidQuery(String),

    /// The location index could not be fetched or decoded.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The search was invoked with a method other than `POST`.
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),
}

/// Convenience alias for search results.
pub type Result<T> = std::result::Result<T, SearchError>;
