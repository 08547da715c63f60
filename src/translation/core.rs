/*!
 * Core translation client.
 *
 * `TranslationClient` dispatches a request to the configured provider in
 * auto or explicit-source mode. Two entry points share that dispatch:
 * `try_translate` reports failures as a `TranslationError`, while
 * `translate` folds them into the returned text for callers that only
 * display a string.
 */

use log::{debug, error};
use std::sync::Arc;

use crate::errors::TranslationError;
use crate::language_catalog::AUTO_DETECT_CODE;
use crate::providers::{TranslationProvider, TranslationRequest};

/// Prefix of the text returned by [`TranslationClient::translate`] on failure
pub const TRANSLATION_ERROR_PREFIX: &str = "Error during translation: ";

/// Client translating text through an external provider
#[derive(Debug, Clone)]
pub struct TranslationClient {
    provider: Arc<dyn TranslationProvider>,
}

impl TranslationClient {
    /// Create a client around a provider
    pub fn new(provider: Arc<dyn TranslationProvider>) -> Self {
        Self { provider }
    }

    /// Build the provider request; the "auto" source selects auto-detect mode
    pub fn build_request(text: &str, target_code: &str, source_code: &str) -> TranslationRequest {
        if source_code == AUTO_DETECT_CODE {
            TranslationRequest::auto(text, target_code)
        } else {
            TranslationRequest::explicit(text, source_code, target_code)
        }
    }

    /// Translate, reporting failures as errors
    pub async fn try_translate(
        &self,
        text: &str,
        target_code: &str,
        source_code: &str,
    ) -> Result<String, TranslationError> {
        let request = Self::build_request(text, target_code, source_code);
        debug!(
            "Translating {} chars with {} ({} -> {})",
            text.chars().count(),
            self.provider.name(),
            request.source.as_deref().unwrap_or(AUTO_DETECT_CODE),
            request.target
        );

        let translated = match self.provider.translate(&request).await {
            Ok(translated) => translated,
            Err(e) => {
                error!("{} translation failed: {}", self.provider.name(), e);
                return Err(TranslationError::Provider(e));
            }
        };

        if translated.trim().is_empty() {
            error!("{} returned an empty translation", self.provider.name());
            return Err(TranslationError::EmptyResponse);
        }

        Ok(translated)
    }

    /// Translate, returning the failure description as text
    ///
    /// On failure the result is `"Error during translation: <description>"`,
    /// which cannot be told apart from a translation by type. Use
    /// [`try_translate`](Self::try_translate) when the distinction matters.
    pub async fn translate(&self, text: &str, target_code: &str, source_code: &str) -> String {
        match self.try_translate(text, target_code, source_code).await {
            Ok(translated) => translated,
            Err(e) => format!("{}{}", TRANSLATION_ERROR_PREFIX, e),
        }
    }
}
