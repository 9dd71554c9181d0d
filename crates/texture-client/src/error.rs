//! Error types for the Messages client.

use texture_types::{ConfigError, SearchError};
use thiserror::Error;

/// Errors that can occur when calling the assistant service.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Client configuration is unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP request failed (connect, timeout, body read).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a body that is not a Messages response.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Server returned 429 Too Many Requests.
    #[error("Rate limited (429): retry after {retry_after:?}s")]
    RateLimited {
        /// Seconds to wait before retrying, if provided by server.
        retry_after: Option<u64>,
    },

    /// Server returned any other non-success status.
    #[error("Server error ({status}): {message}")]
    ServerError {
        /// HTTP status code.
        status: u16,
        /// Error body from server.
        message: String,
    },
}

impl From<ClientError> for SearchError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::InvalidResponse(message) => SearchError::MalformedResponse { message },
            other => SearchError::Transport { message: other.to_string() },
        }
    }
}
