//! The redaction pass entry point.

use futures::future::join_all;

use dlp_client::DlpClient;
use presidio_client::PresidioClient;

use super::detector::{GoogleDlpDetector, PiiDetector, PresidioDetector};
use super::policy::RedactionPolicy;
use super::targets;
use super::{RedactionMethod, RedactionOptions};
use crate::config::{self, PiiConfig};
use crate::error::RedactionError;
use crate::trace::{Span, Trace};

/// Redacts PII from a trace and its spans in place, before persistence.
///
/// Constructed once from configuration and shared by the ingestion
/// pipeline; each [`redact_pii`](Self::redact_pii) call is one pass over
/// one trace+spans bundle.
pub struct PiiRedactor {
    policy: RedactionPolicy,
}

impl PiiRedactor {
    /// Build a redactor from resolved configuration. Each backend is wired
    /// only when its configuration is present.
    pub fn from_config(config: &PiiConfig) -> Self {
        let google_dlp = config.google_credentials.clone().map(|credentials| {
            Box::new(GoogleDlpDetector::new(DlpClient::new(credentials))) as Box<dyn PiiDetector>
        });
        let presidio = config.evaluator_endpoint.clone().map(|endpoint| {
            Box::new(PresidioDetector::new(PresidioClient::new(endpoint))) as Box<dyn PiiDetector>
        });
        Self::with_detectors(google_dlp, presidio)
    }

    /// Detector injection seam for tests and bespoke wiring.
    pub fn with_detectors(
        google_dlp: Option<Box<dyn PiiDetector>>,
        presidio: Option<Box<dyn PiiDetector>>,
    ) -> Self {
        Self {
            policy: RedactionPolicy::new(google_dlp, presidio),
        }
    }

    /// Run one redaction pass.
    ///
    /// If the chosen primary backend is unavailable the whole pass is
    /// skipped up front: an error in enforced mode, a warning otherwise.
    /// Per-leaf detection calls run concurrently; every call runs to
    /// completion before the first error (if any) propagates, and leaves
    /// already rewritten stay rewritten.
    pub async fn redact_pii(
        &self,
        trace: &mut Trace,
        spans: &mut [Span],
        options: &RedactionOptions,
    ) -> Result<(), RedactionError> {
        let primary = options.main_method.unwrap_or_default();
        if !self.policy.is_configured(primary) {
            let var = match primary {
                RedactionMethod::GoogleDlp => config::GOOGLE_APPLICATION_CREDENTIALS,
                RedactionMethod::Presidio => config::EVALUATOR_ENDPOINT,
            };
            if options.enforced {
                return Err(RedactionError::MissingConfiguration {
                    method: primary,
                    var,
                });
            }
            tracing::warn!(
                method = primary.as_str(),
                "{} is not set, so PII redaction will not be performed; you are risking storing PII, this will fail in production by default",
                var
            );
            return Ok(());
        }

        tracing::debug!(trace_id = %trace.trace_id, "checking PII for trace");

        let mut leaves = targets::trace_targets(trace);
        for span in spans.iter_mut() {
            leaves.extend(targets::span_targets(span));
        }

        // join_all, not try_join_all: sibling tasks must run to completion
        // before any error propagates, and applied redactions are kept.
        let results = join_all(
            leaves
                .into_iter()
                .map(|leaf| self.policy.redact_leaf(leaf, options)),
        )
        .await;

        for result in results {
            result?;
        }
        Ok(())
    }
}
