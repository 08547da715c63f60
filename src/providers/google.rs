use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::app_config::TranslationConfig;
use crate::errors::ProviderError;
use super::{DetectionProvider, TranslationProvider, TranslationRequest};

/// Google Translate client using the public `gtx` web endpoint
///
/// The same call serves translation and detection: with `sl=auto` the
/// response carries the detected source language.
#[derive(Debug, Clone)]
pub struct GoogleTranslate {
    /// HTTP client for API requests
    client: Client,
    /// Base URL, e.g. `https://translate.googleapis.com`
    endpoint: String,
    /// User agent sent with each request
    user_agent: String,
}

/// Text and detected language extracted from a `translate_a/single` answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleTranslation {
    /// Concatenated translated segments
    pub text: String,
    /// Source language reported by the service
    pub detected_source: Option<String>,
}

impl GoogleTranslate {
    /// Create a new client
    pub fn new(endpoint: impl Into<String>, user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
            user_agent: user_agent.into(),
        }
    }

    /// Create a client from the translation configuration
    pub fn from_config(config: &TranslationConfig) -> Self {
        Self::new(
            config.endpoint.clone(),
            config.user_agent.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Build the request URL for a translation call
    pub fn build_url(&self, text: &str, source: &str, target: &str) -> Result<Url, ProviderError> {
        let base = format!("{}/translate_a/single", self.endpoint.trim_end_matches('/'));
        Url::parse_with_params(
            &base,
            &[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ],
        )
        .map_err(|e| ProviderError::InvalidInput(format!("Invalid endpoint '{}': {}", base, e)))
    }

    /// Perform a `translate_a/single` call
    pub async fn query(&self, text: &str, source: &str, target: &str) -> Result<GoogleTranslation, ProviderError> {
        let url = self.build_url(text, source, target)?;
        debug!("Google Translate request: sl={} tl={} ({} chars)", source, target, text.chars().count());

        let response = self.client.get(url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Google Translate API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let json = response.json::<Value>().await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Self::parse_response(&json)
    }

    /// Extract the translation from a `translate_a/single` JSON answer
    ///
    /// Element 0 holds the segments (first item of each is translated text),
    /// element 2 the detected source language.
    pub fn parse_response(json: &Value) -> Result<GoogleTranslation, ProviderError> {
        let segments = json.get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderError::ParseError("missing translation segments".to_string()))?;

        let text: String = segments.iter()
            .filter_map(|segment| segment.get(0).and_then(Value::as_str))
            .collect();

        if text.is_empty() {
            return Err(ProviderError::ParseError("response contained no translated text".to_string()));
        }

        let detected_source = json.get(2)
            .and_then(Value::as_str)
            .map(|code| code.to_lowercase());

        Ok(GoogleTranslation { text, detected_source })
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslate {
    fn name(&self) -> &str {
        "Google Translate"
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError> {
        let source = request.source.as_deref().unwrap_or("auto");
        let translation = self.query(&request.text, source, &request.target).await?;
        Ok(translation.text)
    }
}

#[async_trait]
impl DetectionProvider for GoogleTranslate {
    fn name(&self) -> &str {
        "Google Translate (detection)"
    }

    async fn detect(&self, text: &str) -> Result<String, ProviderError> {
        // Target is irrelevant here; English keeps the answer small for most inputs
        let translation = self.query(text, "auto", "en").await?;
        translation.detected_source
            .ok_or_else(|| ProviderError::ParseError("response did not report a source language".to_string()))
    }
}
