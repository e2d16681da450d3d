//! Captured trace data as it arrives from the ingestion pipeline.
//!
//! These records are parsed from raw trace input before persistence and are
//! mutated in place by the redaction engine. Only fields the engine scans
//! are modeled here; everything else rides along in the stores downstream.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One end-to-end recorded execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trace {
    pub trace_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<CapturedValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<CapturedValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCapture>,
}

/// One step/operation within a trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Span {
    pub span_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<CapturedValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<CapturedValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCapture>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contexts: Vec<SpanContext>,
}

/// A captured input or output. `value` is a string for plain text captures
/// and arbitrary JSON otherwise; only string values are redaction
/// candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapturedValue {
    #[serde(rename = "type")]
    pub value_type: String,
    pub value: Value,
}

impl CapturedValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value_type: "text".to_string(),
            value: Value::String(value.into()),
        }
    }
}

/// A captured exception.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorCapture {
    #[serde(default)]
    pub has_exception: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub stacktrace: Vec<String>,
}

/// Auxiliary evidentiary payload attached to a span (e.g. RAG chunks).
/// `content` is polymorphic: an array of values, a map from key to value,
/// or a single value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpanContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    pub content: Value,
}
