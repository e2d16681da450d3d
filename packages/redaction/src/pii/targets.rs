//! Leaf collection: walks a trace and its spans and borrows every string
//! leaf the redaction pass must scan.
//!
//! Each leaf comes from a distinct field or element, so the returned
//! borrows are disjoint and the per-leaf detection calls can run
//! concurrently. Absent substructure and non-string values are simply not
//! collected.

use serde_json::Value;

use crate::trace::{Span, Trace};

fn string_leaf(value: &mut Value) -> Option<&mut String> {
    match value {
        Value::String(s) => Some(s),
        _ => None,
    }
}

/// Trace-level leaves: `input.value`, `output.value`, `error.message` and
/// every stacktrace frame.
pub(crate) fn trace_targets(trace: &mut Trace) -> Vec<&mut String> {
    let mut targets = Vec::new();

    if let Some(input) = trace.input.as_mut() {
        targets.extend(string_leaf(&mut input.value));
    }
    if let Some(output) = trace.output.as_mut() {
        targets.extend(string_leaf(&mut output.value));
    }
    if let Some(error) = trace.error.as_mut() {
        targets.push(&mut error.message);
        targets.extend(error.stacktrace.iter_mut());
    }

    targets
}

/// Span-level leaves: `input.value`, `error.message`, `output.value` when
/// present, every context content leaf, then every stacktrace frame.
pub(crate) fn span_targets(span: &mut Span) -> Vec<&mut String> {
    let mut targets = Vec::new();

    if let Some(input) = span.input.as_mut() {
        targets.extend(string_leaf(&mut input.value));
    }

    // `error` is borrowed once and split: the message is scanned here, the
    // stacktrace frames after the contexts.
    let (message, stacktrace) = match span.error.as_mut() {
        Some(error) => (Some(&mut error.message), Some(&mut error.stacktrace)),
        None => (None, None),
    };
    targets.extend(message);

    if let Some(output) = span.output.as_mut() {
        targets.extend(string_leaf(&mut output.value));
    }

    for context in span.contexts.iter_mut() {
        // Content shape is decided once per context: a sequence scans each
        // element, a mapping scans each member value, anything else is a
        // single candidate leaf.
        match &mut context.content {
            Value::Array(items) => targets.extend(items.iter_mut().filter_map(string_leaf)),
            Value::Object(members) => {
                targets.extend(members.values_mut().filter_map(string_leaf))
            }
            other => targets.extend(string_leaf(other)),
        }
    }

    if let Some(stacktrace) = stacktrace {
        targets.extend(stacktrace.iter_mut());
    }

    targets
}
