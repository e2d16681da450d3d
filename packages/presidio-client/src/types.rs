use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One input record for the evaluator.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationInput {
    pub input: String,
}

/// Evaluator settings: which entities to search for and the minimum
/// confidence to report.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationSettings {
    pub entities: BTreeMap<String, bool>,
    pub min_threshold: f64,
}

/// Body for `pii_detection/evaluate`.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationRequest {
    pub data: Vec<EvaluationInput>,
    pub settings: EvaluationSettings,
    pub env: serde_json::Map<String, serde_json::Value>,
}

/// Outcome state of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    Skipped,
    Error,
    Processed,
}

/// One element of the evaluator's response array.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationResult {
    pub status: EvaluationStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub raw_response: Option<RawResponse>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawResponse {
    #[serde(default)]
    pub anonymized: Option<String>,
}

impl EvaluationResult {
    /// The anonymized replacement text, when the evaluator produced one.
    pub fn anonymized(&self) -> Option<&str> {
        self.raw_response
            .as_ref()
            .and_then(|r| r.anonymized.as_deref())
    }
}
