/*!
 * Provider implementations for the external services.
 *
 * This module contains the boundaries the translator depends on and their
 * client implementations:
 * - Google Translate: translation and language detection
 * - Google TTS: speech synthesis
 * - Mock: in-process providers for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// A single translation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: String,
    /// Explicit source code, `None` lets the provider infer it
    pub source: Option<String>,
    /// Target code
    pub target: String,
}

impl TranslationRequest {
    /// Create a request in auto-detect mode
    pub fn auto(text: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: None,
            target: target.into(),
        }
    }

    /// Create a request with an explicit source language
    pub fn explicit(text: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: Some(source.into()),
            target: target.into(),
        }
    }

    /// Whether the provider has to infer the source language
    pub fn is_auto(&self) -> bool {
        self.source.is_none()
    }
}

/// Machine translation service
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Translate the request text
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError>;
}

/// Language identification service
#[async_trait]
pub trait DetectionProvider: Send + Sync + Debug {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Best-guess language code of the text
    async fn detect(&self, text: &str) -> Result<String, ProviderError>;
}

/// Text-to-speech service
#[async_trait]
pub trait SpeechProvider: Send + Sync + Debug {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Synthesize the text, returning MP3 bytes
    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Vec<u8>, ProviderError>;
}

pub mod google;
pub mod google_tts;
pub mod mock;
