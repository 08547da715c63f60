use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::app_config::Config;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::language_catalog::{LanguageCatalog, AUTO_DETECT_CODE};
use crate::providers::google::GoogleTranslate;
use crate::providers::google_tts::GoogleTts;
use crate::providers::{DetectionProvider, SpeechProvider, TranslationProvider};
use crate::session::SessionState;
use crate::speech::{AudioArtifact, SpeechSynthesizer};
use crate::translation::{LanguageDetector, TranslationClient};

// @module: Application controller running the translate pipeline

/// Message shown above the results
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    /// Informational, e.g. the detected language
    Info(String),
    /// User-correctable problem
    Warning(String),
    /// Failed request
    Error(String),
}

/// Language found by auto-detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedLanguage {
    /// Code reported by the detector, possibly "unknown"
    pub code: String,
    /// Display name of that code
    pub name: String,
}

/// Everything produced by one submit action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Set when the source was "Auto Detect"
    pub detected_language: Option<DetectedLanguage>,
    /// Translated text on success
    pub translated_text: Option<String>,
    /// Synthesized audio, omitted when synthesis failed
    pub audio: Option<AudioArtifact>,
    /// Banners in display order
    pub banners: Vec<Banner>,
}

impl SubmitOutcome {
    /// Whether a translation was produced
    pub fn is_success(&self) -> bool {
        self.translated_text.is_some()
    }
}

/// Main application controller for the translator
#[derive(Debug, Clone)]
pub struct Controller {
    // @field: App configuration
    config: Config,
    detector: LanguageDetector,
    translator: TranslationClient,
    synthesizer: SpeechSynthesizer,
    speech_enabled: bool,
}

impl Controller {
    // @method: Create a controller talking to the Google services
    pub fn with_config(config: Config) -> Self {
        let google = Arc::new(GoogleTranslate::from_config(&config.translation));
        let tts = Arc::new(GoogleTts::from_config(&config.speech));
        Self::with_providers(config, google.clone(), google, tts)
    }

    /// Create a controller with explicit providers
    pub fn with_providers(
        config: Config,
        detection: Arc<dyn DetectionProvider>,
        translation: Arc<dyn TranslationProvider>,
        speech: Arc<dyn SpeechProvider>,
    ) -> Self {
        let detector = LanguageDetector::with_min_chars(detection, config.detection.min_chars);
        let translator = TranslationClient::new(translation);
        let synthesizer = SpeechSynthesizer::new(speech, PathBuf::from(&config.audio.output_dir));

        Self {
            config,
            detector,
            translator,
            synthesizer,
            speech_enabled: true,
        }
    }

    /// Enable or disable speech synthesis
    pub fn set_speech_enabled(&mut self, enabled: bool) {
        self.speech_enabled = enabled;
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one submit action for the given selections
    pub async fn submit(&self, state: &SessionState, text: &str) -> SubmitOutcome {
        let mut outcome = SubmitOutcome::default();

        if text.trim().is_empty() {
            outcome.banners.push(Banner::Warning("Please enter some text to translate.".to_string()));
            return outcome;
        }

        let mut source_code = LanguageCatalog::resolve_code(&state.source_language).to_string();
        let target_code = LanguageCatalog::resolve_target_code(&state.target_language);

        if source_code == AUTO_DETECT_CODE {
            let detected = self.detector.detect(text).await;
            let name = LanguageCatalog::resolve_name(&detected);
            outcome.banners.push(Banner::Info(format!("Detected Language: {}", name)));
            outcome.detected_language = Some(DetectedLanguage {
                code: detected.clone(),
                name,
            });
            source_code = detected;
        }

        let translated = match self.translator.try_translate(text, target_code, &source_code).await {
            Ok(translated) => translated,
            Err(e) => {
                outcome.banners.push(Banner::Error(format!("Translation Error: {}", e)));
                return outcome;
            }
        };
        info!("Translated {} -> {}", source_code, target_code);

        if self.speech_enabled {
            match self.synthesizer.synthesize(&translated, target_code, &self.config.audio.file_name).await {
                Some(path) if FileManager::file_exists(&path) => {
                    outcome.audio = Some(AudioArtifact::new(path));
                }
                _ => warn!("No audio available for this translation"),
            }
        }

        outcome.translated_text = Some(translated);
        outcome
    }

    /// Copy the audio artifact to a download location
    ///
    /// Without a destination, the configured download name is used in the
    /// current directory.
    pub fn save_audio(&self, artifact: &AudioArtifact, destination: Option<&Path>) -> Result<PathBuf, AppError> {
        let destination = destination
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&self.config.audio.download_file_name));

        if !FileManager::file_exists(&artifact.file_path) {
            return Err(AppError::File(format!(
                "Audio file no longer exists: {}",
                artifact.file_path.display()
            )));
        }

        let saved = FileManager::copy_file(&artifact.file_path, &destination)?;
        info!("Audio downloaded to {}", saved.display());
        Ok(saved)
    }
}
