//! Redact a trace document from disk and print the result.
//!
//! Reads a JSON file of the shape `{ "trace": {...}, "spans": [...] }`,
//! runs one redaction pass against the configured backends, and prints the
//! redacted document to stdout.
//!
//! ```bash
//! EVALUATOR_ENDPOINT=http://localhost:5561 \
//!     cargo run --example redact_trace -- trace.json
//! ```

use anyhow::{Context, Result};
use redaction::{PiiConfig, PiiRedactor, RedactionLevel, RedactionOptions, Span, Trace};
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Deserialize)]
struct TraceDocument {
    trace: Trace,
    #[serde(default)]
    spans: Vec<Span>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,redaction=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: redact_trace <trace.json>")?;
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {path}"))?;
    let mut document: TraceDocument =
        serde_json::from_str(&raw).context("failed to parse trace document")?;

    let config = PiiConfig::from_env().context("failed to load configuration")?;
    let redactor = PiiRedactor::from_config(&config);

    let options = RedactionOptions::new(RedactionLevel::Strict);
    redactor
        .redact_pii(&mut document.trace, &mut document.spans, &options)
        .await
        .context("redaction pass failed")?;

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "trace": document.trace,
            "spans": document.spans,
        }))?
    );

    Ok(())
}
