//! Error types for metascrape.
//!
//! The extraction core itself never fails: malformed markup degrades to
//! partial results. These errors are only produced by the strict entry
//! points that validate caller input before any extraction runs.

/// Error type for validating scrape requests.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source URL is not an absolute URL with a host.
    #[error("Invalid URL \"{url}\": {reason}")]
    InvalidUrl {
        /// The offending input, trimmed.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The mode string names no known extraction strategy.
    #[error("Unknown scrape mode \"{0}\"")]
    UnknownMode(String),

    /// Reading the input document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for validating operations.
pub type Result<T> = std::result::Result<T, Error>;
