use async_trait::async_trait;
use bytes::BytesMut;
use log::{debug, error};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::app_config::SpeechConfig;
use crate::errors::ProviderError;
use super::SpeechProvider;

/// Languages accepted by the `translate_tts` voice endpoint
const SUPPORTED_LANGUAGES: &[&str] = &[
    "af", "ar", "bg", "bn", "bs", "ca", "cs", "cy", "da", "de", "el", "en", "eo", "es", "et",
    "eu", "fi", "fr", "gl", "gu", "ha", "hi", "hr", "hu", "id", "is", "it", "iw", "ja", "jw",
    "km", "kn", "ko", "la", "lt", "lv", "ml", "mr", "ms", "my", "ne", "nl", "no", "pa", "pl",
    "pt", "ro", "ru", "si", "sk", "sq", "sr", "su", "sv", "sw", "ta", "te", "th", "tl", "tr",
    "uk", "ur", "vi", "yue", "zh-cn", "zh-tw", "zh",
];

// Places where a chunk may end: sentence or clause punctuation followed by
// whitespace, full-width punctuation, or a line break
static CLAUSE_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.!?;:,؟۔।]+\s+|[。！？、，]+|\n+").expect("valid clause boundary regex")
});

/// Google text-to-speech client using the `translate_tts` endpoint
#[derive(Debug, Clone)]
pub struct GoogleTts {
    /// HTTP client for API requests
    client: Client,
    /// Base URL, e.g. `https://translate.google.com`
    endpoint: String,
    /// User agent sent with each request
    user_agent: String,
    /// Upper bound of characters per request
    max_chunk_chars: usize,
}

impl GoogleTts {
    /// Create a new client
    pub fn new(
        endpoint: impl Into<String>,
        user_agent: impl Into<String>,
        timeout: Duration,
        max_chunk_chars: usize,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
            user_agent: user_agent.into(),
            max_chunk_chars: max_chunk_chars.max(1),
        }
    }

    /// Create a client from the speech configuration
    pub fn from_config(config: &SpeechConfig) -> Self {
        Self::new(
            config.endpoint.clone(),
            config.user_agent.clone(),
            Duration::from_secs(config.timeout_secs),
            config.max_chunk_chars,
        )
    }

    /// Whether the voice endpoint knows the language
    pub fn is_supported(language_code: &str) -> bool {
        SUPPORTED_LANGUAGES.contains(&language_code.trim().to_lowercase().as_str())
    }

    /// The endpoint expects region subtags in upper case (`zh-CN`)
    fn endpoint_language(language_code: &str) -> String {
        let code = language_code.trim().to_lowercase();
        match code.split_once('-') {
            Some((base, region)) => format!("{}-{}", base, region.to_uppercase()),
            None => code,
        }
    }

    /// Split text into request-sized chunks
    ///
    /// Text that fits in one request is sent as is. Longer text is cut at the
    /// last clause boundary inside the limit, else at the last whitespace, else
    /// on a character boundary. Chunks are slices of the input, so tokens such
    /// as `3.14` or `10:30` reach the voice unchanged.
    pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
        let max_chars = max_chars.max(1);
        let mut chunks = Vec::new();
        let mut rest = text.trim();

        while !rest.is_empty() {
            if rest.chars().count() <= max_chars {
                chunks.push(rest.to_string());
                break;
            }

            let limit = rest
                .char_indices()
                .nth(max_chars)
                .map(|(offset, _)| offset)
                .unwrap_or(rest.len());
            let cut = Self::cut_offset(&rest[..limit]).unwrap_or(limit);

            let (head, tail) = rest.split_at(cut);
            let head = head.trim_end();
            if !head.is_empty() {
                chunks.push(head.to_string());
            }
            rest = tail.trim_start();
        }

        chunks
    }

    /// Byte offset of the preferred cut inside `window`, if any
    fn cut_offset(window: &str) -> Option<usize> {
        CLAUSE_BOUNDARY
            .find_iter(window)
            .map(|m| m.end())
            .last()
            .or_else(|| window.rfind(char::is_whitespace))
            .filter(|&offset| offset > 0)
    }

    /// Build the request URL for one chunk
    pub fn build_url(&self, chunk: &str, language: &str, idx: usize, total: usize) -> Result<Url, ProviderError> {
        let base = format!("{}/translate_tts", self.endpoint.trim_end_matches('/'));
        let idx = idx.to_string();
        let total = total.to_string();
        let textlen = chunk.chars().count().to_string();
        Url::parse_with_params(
            &base,
            &[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language),
                ("q", chunk),
                ("total", total.as_str()),
                ("idx", idx.as_str()),
                ("textlen", textlen.as_str()),
            ],
        )
        .map_err(|e| ProviderError::InvalidInput(format!("Invalid endpoint '{}': {}", base, e)))
    }
}

#[async_trait]
impl SpeechProvider for GoogleTts {
    fn name(&self) -> &str {
        "Google TTS"
    }

    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Vec<u8>, ProviderError> {
        if !Self::is_supported(language_code) {
            return Err(ProviderError::UnsupportedLanguage(language_code.to_string()));
        }

        let chunks = Self::split_into_chunks(text, self.max_chunk_chars);
        if chunks.is_empty() {
            return Err(ProviderError::InvalidInput("no text to speak".to_string()));
        }

        let language = Self::endpoint_language(language_code);
        let total = chunks.len();
        let mut audio = BytesMut::new();

        // MP3 frames can be concatenated as-is
        for (idx, chunk) in chunks.iter().enumerate() {
            let url = self.build_url(chunk, &language, idx, total)?;
            debug!("Google TTS request {}/{} ({} chars)", idx + 1, total, chunk.chars().count());

            let response = self.client.get(url)
                .header(reqwest::header::USER_AGENT, &self.user_agent)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let error_text = response.text().await
                    .unwrap_or_else(|_| "Failed to get error response text".to_string());
                error!("Google TTS API error ({}): {}", status, error_text);
                return Err(ProviderError::ApiError {
                    status_code: status.as_u16(),
                    message: error_text,
                });
            }

            audio.extend_from_slice(&response.bytes().await?);
        }

        if audio.is_empty() {
            return Err(ProviderError::ParseError("speech response contained no audio".to_string()));
        }

        Ok(audio.to_vec())
    }
}
