//! The detect-and-redact capability and its two backend implementations.

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;

use dlp_client::{DlpClient, Finding};
use presidio_client::{EvaluationStatus, PresidioClient};

use super::{entities, RedactionLevel};
use crate::error::DetectorError;

/// Replacement token for redacted content.
pub const REDACTED_TOKEN: &str = "[REDACTED]";

/// Per-codepoint placeholder written over matched ranges before collapsing.
/// One placeholder per codepoint keeps later findings' offsets valid.
const PLACEHOLDER: char = '✳';

/// Minimum confidence forwarded to the Presidio evaluator.
const MIN_THRESHOLD: f64 = 0.5;

lazy_static! {
    static ref PLACEHOLDER_RUN: Regex = Regex::new("✳+").unwrap();
}

/// A detection backend: given a string and a strictness level, produce the
/// redacted string. Returning the input unchanged means nothing was
/// detected.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PiiDetector: Send + Sync {
    async fn detect(&self, text: &str, level: RedactionLevel) -> Result<String, DetectorError>;
}

/// Cloud DLP backend: inspect for findings, then blank every reported
/// codepoint range.
pub struct GoogleDlpDetector {
    client: DlpClient,
}

impl GoogleDlpDetector {
    pub fn new(client: DlpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PiiDetector for GoogleDlpDetector {
    async fn detect(&self, text: &str, level: RedactionLevel) -> Result<String, DetectorError> {
        let findings = self
            .client
            .inspect(text, entities::google_dlp_info_types(level))
            .await?;
        Ok(apply_findings(text, &findings))
    }
}

/// Replace every finding's `[start, end)` codepoint range with placeholder
/// characters, then collapse each maximal placeholder run into one
/// `[REDACTED]` token. Findings without a range are skipped; ranges are
/// clamped to the text length.
fn apply_findings(text: &str, findings: &[Finding]) -> String {
    if findings.is_empty() {
        return text.to_string();
    }

    let mut chars: Vec<char> = text.chars().collect();
    let mut matched = false;
    for finding in findings {
        let Some((start, end)) = finding.codepoint_range() else {
            continue;
        };
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }
        matched = true;
        for slot in &mut chars[start..end] {
            *slot = PLACEHOLDER;
        }
    }
    if !matched {
        return text.to_string();
    }

    let masked: String = chars.into_iter().collect();
    PLACEHOLDER_RUN
        .replace_all(&masked, REDACTED_TOKEN)
        .into_owned()
}

/// Presidio backend: the evaluator anonymizes server-side and returns the
/// replacement text.
pub struct PresidioDetector {
    client: PresidioClient,
}

impl PresidioDetector {
    pub fn new(client: PresidioClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PiiDetector for PresidioDetector {
    async fn detect(&self, text: &str, level: RedactionLevel) -> Result<String, DetectorError> {
        let result = self
            .client
            .evaluate(text, entities::presidio_entities(level), MIN_THRESHOLD)
            .await?;

        match result.status {
            EvaluationStatus::Skipped => Ok(text.to_string()),
            EvaluationStatus::Error => Err(DetectorError::Evaluation(
                result
                    .message
                    .unwrap_or_else(|| "unknown evaluator error".to_string()),
            )),
            EvaluationStatus::Processed => Ok(result
                .anonymized()
                .map(str::to_string)
                .unwrap_or_else(|| text.to_string())),
        }
    }
}
