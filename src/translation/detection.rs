/*!
 * Language detection with graceful degradation.
 */

use log::{debug, error};
use std::sync::Arc;

use crate::providers::DetectionProvider;

/// Code reported when the language cannot be determined
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Default shortest input worth sending to the provider
pub const DEFAULT_MIN_CHARS: usize = 3;

/// Detects the language of free text, never failing
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    provider: Arc<dyn DetectionProvider>,
    min_chars: usize,
}

impl LanguageDetector {
    /// Create a detector with the default minimum length
    pub fn new(provider: Arc<dyn DetectionProvider>) -> Self {
        Self::with_min_chars(provider, DEFAULT_MIN_CHARS)
    }

    /// Create a detector with a custom minimum length
    pub fn with_min_chars(provider: Arc<dyn DetectionProvider>, min_chars: usize) -> Self {
        Self { provider, min_chars }
    }

    /// Best-guess language code, or [`UNKNOWN_LANGUAGE`]
    ///
    /// Inputs shorter than the minimum (after trimming, counted in
    /// characters) are not sent to the provider.
    pub async fn detect(&self, text: &str) -> String {
        let trimmed = text.trim();
        if trimmed.chars().count() < self.min_chars {
            debug!("Input too short for detection ({} chars)", trimmed.chars().count());
            return UNKNOWN_LANGUAGE.to_string();
        }

        match self.provider.detect(text).await {
            Ok(code) if !code.trim().is_empty() => {
                let code = code.trim().to_lowercase();
                debug!("{} detected '{}'", self.provider.name(), code);
                code
            }
            Ok(_) => {
                error!("{} returned an empty language code", self.provider.name());
                UNKNOWN_LANGUAGE.to_string()
            }
            Err(e) => {
                error!("{} language detection failed: {}", self.provider.name(), e);
                UNKNOWN_LANGUAGE.to_string()
            }
        }
    }
}
