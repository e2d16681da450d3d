//! Typed errors for the DLP client.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DlpError>;

/// Errors that can occur when talking to the DLP inspection API.
#[derive(Debug, Error)]
pub enum DlpError {
    /// Transport-level failure (connection, TLS, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("DLP API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The credentials blob could not be parsed
    #[error("invalid DLP credentials: {0}")]
    InvalidCredentials(String),
}
