//! Error types for the API boundary.

use thiserror::Error;

/// Errors that can occur when querying the Moonitor API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The configured base URL cannot be used.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Could not reach the API.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Timeout waiting for response.
    #[error("Request timed out")]
    Timeout,

    /// The API answered with a non-success status.
    #[error("API returned status {status}")]
    Http { status: u16 },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The task running the request stopped before producing a response.
    #[error("Request did not complete: {0}")]
    Aborted(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Http {
                status: status.as_u16(),
            }
        } else {
            ApiError::Connection(err.to_string())
        }
    }
}
