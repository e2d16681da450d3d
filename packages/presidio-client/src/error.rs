//! Typed errors for the Presidio evaluator client.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PresidioError>;

/// Errors that can occur when talking to the evaluator service.
#[derive(Debug, Error)]
pub enum PresidioError {
    /// Transport-level failure (connection, TLS, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("evaluator error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The service answered 200 with an empty results array
    #[error("unexpected response: empty results")]
    EmptyResponse,
}
