//! Error types for the Groq client.

use thiserror::Error;

/// Result type for Groq client operations.
pub type Result<T> = std::result::Result<T, GroqError>;

/// Groq client errors.
#[derive(Debug, Error)]
pub enum GroqError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response, rate limit, invalid request)
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Error body text
        message: String,
    },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl GroqError {
    /// Whether the provider throttled the request.
    ///
    /// Groq signals throttling with HTTP 429; some gateways only mention
    /// "rate limit" in the error body.
    pub fn is_rate_limit(&self) -> bool {
        match self {
            GroqError::Api { status, message } => {
                *status == 429 || message.to_lowercase().contains("rate limit")
            }
            _ => false,
        }
    }
}
