//! PII detection and redaction for captured traces.
//!
//! Runs over a trace and its spans after parsing and before persistence,
//! rewriting string leaves that contain personally identifiable
//! information.
//!
//! # Detection backends
//!
//! - **Cloud DLP**: sends each leaf to the DLP inspection API and replaces
//!   every reported codepoint range with the `[REDACTED]` token.
//! - **Presidio**: sends each leaf to a self-hosted evaluator service and
//!   adopts the anonymized text it returns.
//!
//! Both are implementations of the [`PiiDetector`] capability. One acts as
//! primary (Presidio unless overridden), the other as a one-shot fallback.
//!
//! # Failure modes
//!
//! In enforced mode a leaf that fails on both backends fails the whole pass
//! and the caller must not persist the trace. Otherwise failures are logged
//! and the text flows through unredacted.
//!
//! # Idempotence
//!
//! Each leaf is visited exactly once per pass. Passes are NOT idempotent
//! across repeated runs: a backend may re-detect the `[REDACTED]` token
//! itself (most likely via person-name recognizers at the strict level) and
//! rewrite it again. Callers run one pass per trace, so no deduplication is
//! attempted here.

pub mod detector;
pub mod entities;
pub mod policy;
pub mod redactor;
mod targets;

pub use detector::{GoogleDlpDetector, PiiDetector, PresidioDetector};
pub use policy::RedactionPolicy;
pub use redactor::PiiRedactor;

use serde::{Deserialize, Serialize};

/// Strictness tier controlling which entity types are searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RedactionLevel {
    /// High-confidence identifiers only: financial, contact, government-ID
    Essential,
    /// Everything in essential plus names, locations, dates of birth and
    /// medical identifiers
    Strict,
}

/// Which detection backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionMethod {
    GoogleDlp,
    #[default]
    Presidio,
}

impl RedactionMethod {
    /// The fallback peer of this backend.
    pub fn other(self) -> Self {
        match self {
            Self::GoogleDlp => Self::Presidio,
            Self::Presidio => Self::GoogleDlp,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoogleDlp => "google_dlp",
            Self::Presidio => "presidio",
        }
    }
}

/// Options for one redaction pass over one trace+spans bundle.
#[derive(Debug, Clone)]
pub struct RedactionOptions {
    pub level: RedactionLevel,
    /// When true, redaction failures abort the pass (and the caller must
    /// abort persistence). When false they are logged and skipped.
    pub enforced: bool,
    /// Primary backend override. Presidio when unset.
    pub main_method: Option<RedactionMethod>,
}

impl RedactionOptions {
    pub fn new(level: RedactionLevel) -> Self {
        Self {
            level,
            enforced: false,
            main_method: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_use_wire_casing() {
        assert_eq!(
            serde_json::to_string(&RedactionLevel::Essential).unwrap(),
            "\"ESSENTIAL\""
        );
        assert_eq!(
            serde_json::from_str::<RedactionLevel>("\"STRICT\"").unwrap(),
            RedactionLevel::Strict
        );
    }

    #[test]
    fn methods_use_wire_casing_and_default_to_presidio() {
        assert_eq!(
            serde_json::to_string(&RedactionMethod::GoogleDlp).unwrap(),
            "\"google_dlp\""
        );
        assert_eq!(RedactionMethod::default(), RedactionMethod::Presidio);
        assert_eq!(RedactionMethod::Presidio.other(), RedactionMethod::GoogleDlp);
        assert_eq!(RedactionMethod::GoogleDlp.other(), RedactionMethod::Presidio);
    }
}
