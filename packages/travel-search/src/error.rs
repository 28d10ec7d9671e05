//! Typed errors for the travel-search library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur while talking to a search backend.
///
/// Per-record normalization problems are not represented here: a record
/// that cannot be normalized is dropped with a warning and the search
/// continues. These errors cover the whole-request failures that trip
/// the orchestrator into fallback generation.
#[derive(Debug, Error)]
pub enum SearchError {
    /// HTTP transport failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Backend answered with a non-success status
    #[error("search backend error: status {status}")]
    Backend { status: u16 },

    /// Backend endpoint is not a valid URL
    #[error("invalid endpoint URL: {url}")]
    InvalidEndpoint { url: String },

    /// Response body could not be decoded
    #[error("response decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
