//! Error types for the hindsight library.
//!
//! This module provides a unified error type with explicit variants for
//! provider failures and query validation errors. "No results" is never an
//! error: the finder and streamer report it as `Ok(None)`.

use thiserror::Error;

/// The unified error type for hindsight operations.
///
/// Covers all failure modes in the library, with explicit variants to allow
/// callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// The history provider failed to answer a call.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The query parameters were rejected before any provider call.
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] InvalidQueryError),
}

/// Failures reported by a [`HistoryProvider`](crate::HistoryProvider)
/// implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The page-search call failed.
    #[error("page search failed: {message}")]
    Search { message: String },

    /// Fetching the visit list for a single URL failed.
    ///
    /// The finder recovers from this per page; it only surfaces when a
    /// provider implementation chooses to fail the whole call.
    #[error("visit fetch failed for '{url}': {message}")]
    VisitFetch { url: String, message: String },

    /// An IO error from a storage-backed provider.
    #[error("IO error: {message}")]
    Io { message: String },

    /// Any other backend failure.
    #[error("backend error: {message}")]
    Backend { message: String },
}

impl From<std::io::Error> for ProviderError {
    fn from(err: std::io::Error) -> Self {
        ProviderError::Io {
            message: err.to_string(),
        }
    }
}

/// Query validation errors.
#[derive(Debug, Error)]
pub enum InvalidQueryError {
    /// The time window is reversed (start after end).
    #[error("window start {start_ms} is after end {end_ms}")]
    WindowReversed { start_ms: i64, end_ms: i64 },

    /// A page size of zero was requested.
    #[error("page size must be nonzero")]
    ZeroPageSize,
}
