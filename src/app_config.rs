use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use url::Url;

use crate::language_catalog::LanguageCatalog;
use crate::session::models::Theme;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language display name selected at session start
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language display name selected at session start
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Theme applied at session start
    #[serde(default)]
    pub theme: Theme,

    /// Translation provider config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Speech provider config
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Audio artifact config
    #[serde(default)]
    pub audio: AudioConfig,

    /// Language detection config
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Service endpoint URL
    #[serde(default = "default_translation_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with each request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_translation_endpoint(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Text-to-speech service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpeechConfig {
    /// Service endpoint URL
    #[serde(default = "default_speech_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum characters sent in a single synthesis request
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,

    /// User agent sent with each request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            endpoint: default_speech_endpoint(),
            timeout_secs: default_timeout_secs(),
            max_chunk_chars: default_max_chunk_chars(),
            user_agent: default_user_agent(),
        }
    }
}

/// Where synthesized audio is written
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AudioConfig {
    /// Directory receiving the audio artifact
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Fixed artifact name, overwritten on every synthesis
    #[serde(default = "default_audio_file_name")]
    pub file_name: String,

    /// Name proposed for the download action
    #[serde(default = "default_download_file_name")]
    pub download_file_name: String,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            file_name: default_audio_file_name(),
            download_file_name: default_download_file_name(),
        }
    }
}

/// Language detection settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DetectionConfig {
    /// Shortest trimmed input handed to the detection provider
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_chars: default_min_chars(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Matching filter for the `log` facade
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_source_language() -> String {
    "English".to_string()
}

fn default_target_language() -> String {
    "Hindi".to_string()
}

fn default_translation_endpoint() -> String {
    "https://translate.googleapis.com".to_string()
}

fn default_speech_endpoint() -> String {
    "https://translate.google.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

fn default_max_chunk_chars() -> usize {
    100 // upper bound accepted by the translate_tts endpoint
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_audio_file_name() -> String {
    "translated.mp3".to_string()
}

fn default_download_file_name() -> String {
    "translated_audio.mp3".to_string()
}

fn default_min_chars() -> usize {
    3
}

impl Config {
    /// Load a configuration file, writing a default one when it does not exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;
            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            return Ok(config);
        }

        log::warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write default config to file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if !LanguageCatalog::contains(&self.source_language) {
            return Err(anyhow!("Unknown source language: {}", self.source_language));
        }
        if !LanguageCatalog::contains(&self.target_language) {
            return Err(anyhow!("Unknown target language: {}", self.target_language));
        }
        if LanguageCatalog::resolve_code(&self.target_language) == crate::language_catalog::AUTO_DETECT_CODE {
            return Err(anyhow!("'{}' cannot be used as a target language", self.target_language));
        }

        Url::parse(&self.translation.endpoint)
            .with_context(|| format!("Invalid translation endpoint: {}", self.translation.endpoint))?;
        Url::parse(&self.speech.endpoint)
            .with_context(|| format!("Invalid speech endpoint: {}", self.speech.endpoint))?;

        if self.translation.timeout_secs == 0 {
            return Err(anyhow!("translation.timeout_secs must be greater than zero"));
        }
        if self.speech.timeout_secs == 0 {
            return Err(anyhow!("speech.timeout_secs must be greater than zero"));
        }

        if self.speech.max_chunk_chars == 0 {
            return Err(anyhow!("speech.max_chunk_chars must be greater than zero"));
        }

        let file_name = self.audio.file_name.trim();
        if file_name.is_empty() || !file_name.to_lowercase().ends_with(".mp3") {
            return Err(anyhow!("audio.file_name must be an .mp3 file name, got '{}'", self.audio.file_name));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            theme: Theme::default(),
            translation: TranslationConfig::default(),
            speech: SpeechConfig::default(),
            audio: AudioConfig::default(),
            detection: DetectionConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
