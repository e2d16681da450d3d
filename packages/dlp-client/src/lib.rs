//! Pure REST client for the Google Cloud DLP content inspection API.
//!
//! A minimal client for `content:inspect`. Sends a piece of text plus the
//! list of info types to search for, and returns the findings with their
//! codepoint ranges. Interpreting and applying findings is the caller's
//! concern.
//!
//! # Example
//!
//! ```rust,ignore
//! use dlp_client::{DlpClient, DlpCredentials};
//!
//! let credentials = DlpCredentials::from_json(&blob)?;
//! let client = DlpClient::new(credentials);
//!
//! let findings = client
//!     .inspect("my email is a@b.com", &["EMAIL_ADDRESS"])
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{DlpError, Result};
pub use types::{CodepointRange, DlpCredentials, Finding};

use types::{ContentItem, InfoType, InspectConfig, InspectLimits, InspectRequest, InspectResponse};

const BASE_URL: &str = "https://dlp.googleapis.com/v2";

impl DlpCredentials {
    /// Parse an inline JSON credentials blob.
    pub fn from_json(blob: &str) -> Result<Self> {
        serde_json::from_str(blob).map_err(|e| DlpError::InvalidCredentials(e.to_string()))
    }
}

pub struct DlpClient {
    client: reqwest::Client,
    credentials: DlpCredentials,
    base_url: String,
}

impl DlpClient {
    pub fn new(credentials: DlpCredentials) -> Self {
        Self::with_base_url(credentials, BASE_URL.to_string())
    }

    /// Client against a non-default API host. Used by tests.
    pub fn with_base_url(credentials: DlpCredentials, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
            base_url,
        }
    }

    /// Resource path the inspection runs under.
    pub fn parent(&self) -> String {
        format!(
            "projects/{}/locations/global",
            self.credentials.project_id
        )
    }

    /// Inspect `text` for the given info types. Returns the raw findings;
    /// an empty vec means nothing was detected.
    pub async fn inspect(&self, text: &str, info_types: &[&str]) -> Result<Vec<Finding>> {
        let parent = self.parent();
        let request = InspectRequest {
            parent: parent.clone(),
            inspect_config: InspectConfig {
                info_types: info_types
                    .iter()
                    .map(|name| InfoType {
                        name: (*name).to_string(),
                    })
                    .collect(),
                min_likelihood: "POSSIBLE".to_string(),
                // 0 = server maximum
                limits: InspectLimits {
                    max_findings_per_request: 0,
                },
                include_quote: true,
            },
            item: ContentItem {
                value: text.to_string(),
            },
        };

        let url = format!("{}/{}/content:inspect", self.base_url, parent);
        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.credentials.api_key)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DlpError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let response: InspectResponse = resp.json().await?;
        let findings = response.result.map(|r| r.findings).unwrap_or_default();
        tracing::debug!(count = findings.len(), "DLP inspection complete");
        Ok(findings)
    }
}
