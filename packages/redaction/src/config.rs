use std::env;

use dlp_client::DlpCredentials;
use dotenvy::dotenv;

use crate::error::ConfigError;

/// Environment variable carrying the inline JSON credentials blob for the
/// cloud DLP backend.
pub const GOOGLE_APPLICATION_CREDENTIALS: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Environment variable carrying the base URL of the self-hosted evaluator
/// service that fronts Presidio.
pub const EVALUATOR_ENDPOINT: &str = "EVALUATOR_ENDPOINT";

/// Redaction backend configuration, resolved once at startup.
///
/// Either backend may be absent; absence of one does not prevent using the
/// other. Which absences are fatal is decided per pass by
/// [`RedactionOptions::enforced`](crate::pii::RedactionOptions).
#[derive(Debug, Clone)]
pub struct PiiConfig {
    pub google_credentials: Option<DlpCredentials>,
    pub evaluator_endpoint: Option<String>,
}

impl PiiConfig {
    /// Load configuration from environment variables.
    ///
    /// A present-but-unparsable credentials blob is an error: misconfigured
    /// credentials should fail at startup, not mid-pass.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        let _ = dotenv();

        let google_credentials = match env::var(GOOGLE_APPLICATION_CREDENTIALS) {
            Ok(blob) => Some(DlpCredentials::from_json(&blob)?),
            Err(_) => None,
        };

        Ok(Self {
            google_credentials,
            evaluator_endpoint: env::var(EVALUATOR_ENDPOINT).ok(),
        })
    }
}
