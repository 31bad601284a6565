//! Typed errors for the extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during extraction and summarization.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// URL failed validation
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// No transcript could be found for a video URL
    #[error("no transcript available for: {url}")]
    TranscriptUnavailable { url: String },

    /// PDF text extraction failed
    #[error("PDF extraction failed for {name}: {message}")]
    Pdf { name: String, message: String },

    /// Uploaded text file was not valid UTF-8
    #[error("text decode failed for {name}")]
    TextDecode {
        name: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Completion API call failed
    #[error("completion failed: {0}")]
    Completion(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
