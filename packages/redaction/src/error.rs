//! Typed errors for the redaction engine.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match
//! on the failure class: missing configuration is only fatal in enforced
//! mode, detector failures trigger the fallback backend first.

use thiserror::Error;

use crate::pii::RedactionMethod;

/// Errors surfaced by a single detection backend.
#[derive(Debug, Error)]
pub enum DetectorError {
    /// The backend was selected but its prerequisites are absent
    #[error("{0} detector is not configured")]
    NotConfigured(&'static str),

    /// Cloud DLP transport or API failure
    #[error(transparent)]
    Dlp(#[from] dlp_client::DlpError),

    /// Evaluator transport or API failure
    #[error(transparent)]
    Presidio(#[from] presidio_client::PresidioError),

    /// The evaluator answered well-formed but signaled an internal failure
    #[error("evaluator reported an error: {0}")]
    Evaluation(String),
}

/// Errors surfaced by a whole redaction pass.
#[derive(Debug, Error)]
pub enum RedactionError {
    /// The chosen primary backend cannot run at all
    #[error("{var} is not set, PII redaction cannot be performed")]
    MissingConfiguration {
        method: RedactionMethod,
        var: &'static str,
    },

    /// A leaf failed after the fallback was exhausted (enforced mode only)
    #[error(transparent)]
    Detector(#[from] DetectorError),
}

/// Errors loading the redaction configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GOOGLE_APPLICATION_CREDENTIALS is set but invalid: {0}")]
    InvalidGoogleCredentials(#[from] dlp_client::DlpError),
}
