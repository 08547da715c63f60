/*!
 * # Smart Translator
 *
 * A Rust library and terminal app that translates text between languages and
 * reads the result aloud.
 *
 * ## Features
 *
 * - Translate text through Google Translate, with optional auto-detection
 *   of the source language
 * - Synthesize the translation to an MP3 file through Google TTS
 * - A small interactive form with swap and theme toggles
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `language_catalog`: Supported languages and their codes
 * - `translation`: Translation client and language detector:
 *   - `translation::core`: Translation with failure reporting
 *   - `translation::detection`: Detection degrading to "unknown"
 * - `speech`: Speech synthesis to an audio file
 * - `session`: Form selections and their transitions
 * - `app_controller`: The translate pipeline behind the submit action
 * - `presentation`: Terminal rendering of the form
 * - `providers`: Client implementations for the external services:
 *   - `providers::google`: Google Translate client
 *   - `providers::google_tts`: Google text-to-speech client
 *   - `providers::mock`: In-process providers for tests
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_catalog;
pub mod presentation;
pub mod providers;
pub mod session;
pub mod speech;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Banner, Controller, SubmitOutcome};
pub use errors::{AppError, ProviderError, SessionError, TranslationError};
pub use language_catalog::{LanguageCatalog, LanguageEntry};
pub use session::{SessionController, SessionState, Theme};
pub use speech::{AudioArtifact, SpeechSynthesizer};
pub use translation::{LanguageDetector, TranslationClient};
