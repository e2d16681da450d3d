//! PII redaction engine for captured LLM traces and spans.
//!
//! Sits between trace parsing and persistence: every string leaf of a
//! trace+spans bundle is scanned by a detection backend and rewritten in
//! place with the PII removed. Two backends are supported — a cloud DLP
//! inspection API and a self-hosted Presidio evaluator — with one-shot
//! fallback from the primary to the secondary.
//!
//! # Example
//!
//! ```rust,ignore
//! use redaction::{PiiConfig, PiiRedactor, RedactionLevel, RedactionOptions};
//!
//! let config = PiiConfig::from_env()?;
//! let redactor = PiiRedactor::from_config(&config);
//!
//! let options = RedactionOptions::new(RedactionLevel::Essential);
//! redactor.redact_pii(&mut trace, &mut spans, &options).await?;
//! // trace/spans are now safe to persist
//! ```

pub mod config;
pub mod error;
pub mod pii;
pub mod trace;

pub use config::PiiConfig;
pub use error::{ConfigError, DetectorError, RedactionError};
pub use pii::{
    GoogleDlpDetector, PiiDetector, PiiRedactor, PresidioDetector, RedactionLevel,
    RedactionMethod, RedactionOptions,
};
pub use trace::{CapturedValue, ErrorCapture, Span, SpanContext, Trace};
