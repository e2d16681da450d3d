//! Primary/fallback selection between the two detection backends.

use super::detector::PiiDetector;
use super::{RedactionMethod, RedactionOptions};
use crate::error::DetectorError;

/// Holds the configured detectors and applies the one-shot fallback rule:
/// try the primary, then the secondary once, then either propagate
/// (enforced) or log and leave the text unredacted.
pub struct RedactionPolicy {
    google_dlp: Option<Box<dyn PiiDetector>>,
    presidio: Option<Box<dyn PiiDetector>>,
}

impl RedactionPolicy {
    pub fn new(
        google_dlp: Option<Box<dyn PiiDetector>>,
        presidio: Option<Box<dyn PiiDetector>>,
    ) -> Self {
        Self {
            google_dlp,
            presidio,
        }
    }

    pub fn is_configured(&self, method: RedactionMethod) -> bool {
        self.detector(method).is_some()
    }

    fn detector(&self, method: RedactionMethod) -> Option<&dyn PiiDetector> {
        match method {
            RedactionMethod::GoogleDlp => self.google_dlp.as_deref(),
            RedactionMethod::Presidio => self.presidio.as_deref(),
        }
    }

    async fn detect_with(
        &self,
        method: RedactionMethod,
        text: &str,
        options: &RedactionOptions,
    ) -> Result<String, DetectorError> {
        match self.detector(method) {
            Some(detector) => detector.detect(text, options.level).await,
            None => Err(DetectorError::NotConfigured(method.as_str())),
        }
    }

    /// Redact one string leaf in place.
    pub(crate) async fn redact_leaf(
        &self,
        leaf: &mut String,
        options: &RedactionOptions,
    ) -> Result<(), DetectorError> {
        let first = options.main_method.unwrap_or_default();
        let second = first.other();

        let first_attempt = self.detect_with(first, leaf.as_str(), options).await;
        let first_err = match first_attempt {
            Ok(redacted) => {
                *leaf = redacted;
                return Ok(());
            }
            Err(e) => e,
        };

        if !self.is_configured(second) {
            if options.enforced {
                return Err(first_err);
            }
            tracing::warn!(
                method = first.as_str(),
                error = %first_err,
                "failed to redact PII but allowed to continue, this will fail in production by default"
            );
            return Ok(());
        }

        tracing::debug!(
            from = first.as_str(),
            to = second.as_str(),
            error = %first_err,
            "PII detection failed, running fallback backend"
        );

        let second_attempt = self.detect_with(second, leaf.as_str(), options).await;
        match second_attempt {
            Ok(redacted) => {
                *leaf = redacted;
                Ok(())
            }
            Err(second_err) => {
                if options.enforced {
                    return Err(second_err);
                }
                tracing::warn!(
                    method = second.as_str(),
                    error = %second_err,
                    "failed to redact PII but allowed to continue, this will fail in production by default"
                );
                Ok(())
            }
        }
    }
}
