//! Pure REST client for a self-hosted Presidio PII evaluator service.
//!
//! The evaluator exposes Presidio behind a batch evaluation endpoint:
//! `POST {endpoint}/presidio/pii_detection/evaluate`. This client sends one
//! input at a time and returns the first evaluation result; acting on the
//! result's status is the caller's concern.
//!
//! # Example
//!
//! ```rust,ignore
//! use presidio_client::{EvaluationStatus, PresidioClient};
//!
//! let client = PresidioClient::new("http://localhost:5561".into());
//!
//! let result = client
//!     .evaluate("my email is a@b.com", &["EMAIL_ADDRESS"], 0.5)
//!     .await?;
//! if result.status == EvaluationStatus::Processed {
//!     println!("{:?}", result.anonymized());
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{PresidioError, Result};
pub use types::{EvaluationResult, EvaluationStatus, RawResponse};

use types::{EvaluationInput, EvaluationRequest, EvaluationSettings};

pub struct PresidioClient {
    client: reqwest::Client,
    endpoint: String,
}

impl PresidioClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Evaluate `text` for the given entity names. Names are lowercased into
    /// the evaluator's entity map.
    pub async fn evaluate(
        &self,
        text: &str,
        entities: &[&str],
        min_threshold: f64,
    ) -> Result<EvaluationResult> {
        let request = EvaluationRequest {
            data: vec![EvaluationInput {
                input: text.to_string(),
            }],
            settings: EvaluationSettings {
                entities: entities
                    .iter()
                    .map(|name| (name.to_lowercase(), true))
                    .collect(),
                min_threshold,
            },
            env: serde_json::Map::new(),
        };

        let url = format!("{}/presidio/pii_detection/evaluate", self.endpoint);
        let resp = self.client.post(&url).json(&request).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PresidioError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let mut results: Vec<EvaluationResult> = resp.json().await?;
        if results.is_empty() {
            return Err(PresidioError::EmptyResponse);
        }
        let result = results.swap_remove(0);
        tracing::debug!(status = ?result.status, "Presidio evaluation complete");
        Ok(result)
    }
}
