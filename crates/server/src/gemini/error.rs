//! Error types for the Gemini API client.

use thiserror::Error;

/// Errors that can occur when interacting with the Gemini API.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// No API key configured. Detected at call time, not startup.
    #[error("Gemini API key is missing. Set GEMINI_API_KEY.")]
    MissingApiKey,

    /// HTTP request failed (connect, timeout, transport).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Gemini API returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code from the API.
        status: u16,
        /// Response body, as far as it could be read.
        message: String,
    },

    /// Failed to parse the response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// The API responded successfully but produced no usable text.
    #[error("Gemini API returned no text response.")]
    EmptyReply,
}

impl GeminiError {
    /// Whether this failure means the service is unreachable or
    /// unconfigured, as opposed to a malformed exchange.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::MissingApiKey => true,
            Self::Http(err) => err.is_timeout() || err.is_connect(),
            Self::Api { .. } | Self::Parse(_) | Self::EmptyReply => false,
        }
    }
}
