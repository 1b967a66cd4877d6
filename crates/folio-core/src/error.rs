//! Cache-specific error types

use thiserror::Error;

/// Errors raised when the reading-position cache cannot be consulted.
///
/// A book that is simply absent from the cache is not an error; lookups
/// return `None` for that case.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Cache file missing or unreadable
    #[error("cache unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    /// Cache file exists but is not valid JSON
    #[error("cache malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
