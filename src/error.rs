//! Error types for html-crawler.
//!
//! This module defines the error types returned by loading, configuring,
//! cleaning and converting documents.

/// Error type for crawler operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URL failed well-formedness validation. No request was made.
    #[error("Invalid URL provided: {0}")]
    InvalidUrl(String),

    /// A well-formed URL could not be retrieved.
    #[error("Failed to get content: {0}")]
    FetchError(String),

    /// A custom removal pattern is not a valid regular expression.
    #[error("Invalid custom pattern `{pattern}`: {reason}")]
    PatternError {
        /// The pattern as supplied by the caller.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The Markdown converter failed.
    #[error("Markdown conversion failed: {0}")]
    ConversionError(String),

    /// Persisted options could not be parsed.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

/// Result type alias for crawler operations.
pub type Result<T> = std::result::Result<T, Error>;
