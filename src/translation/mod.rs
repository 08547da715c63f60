/*!
 * Translation and language detection on top of the external providers.
 *
 * - `core`: translation client with failure reporting
 * - `detection`: language detector that degrades to "unknown"
 */

// Re-export main types for easier usage
pub use self::core::{TranslationClient, TRANSLATION_ERROR_PREFIX};
pub use self::detection::{LanguageDetector, UNKNOWN_LANGUAGE};

// Submodules
pub mod core;
pub mod detection;
