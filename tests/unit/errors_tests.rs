/*!
 * Tests for error types and conversions
 */

use smart_translator::errors::{AppError, ProviderError, SessionError, TranslationError};

#[test]
fn test_providerError_apiError_shouldDisplayStatusAndMessage() {
    let error = ProviderError::ApiError {
        status_code: 429,
        message: "Too many requests".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("429"));
    assert!(display.contains("Too many requests"));
}

#[test]
fn test_providerError_unsupportedLanguage_shouldNameLanguage() {
    let error = ProviderError::UnsupportedLanguage("or".to_string());
    assert_eq!(error.to_string(), "Language not supported: or");
}

#[test]
fn test_translationError_fromProviderError_shouldWrap() {
    let error: TranslationError = ProviderError::Timeout("30s".to_string()).into();
    let display = error.to_string();
    assert!(display.contains("Provider error"));
    assert!(display.contains("30s"));
}

#[test]
fn test_sessionError_sentinelTarget_shouldExplain() {
    let error = SessionError::SentinelTarget("Auto Detect".to_string());
    assert!(error.to_string().contains("only be used as a source"));
}

#[test]
fn test_appError_conversions_shouldKeepMessages() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.mp3");
    assert!(matches!(AppError::from(io), AppError::File(m) if m.contains("missing.mp3")));

    let any = anyhow::anyhow!("something odd");
    assert!(matches!(AppError::from(any), AppError::Unknown(m) if m == "something odd"));

    let session: AppError = SessionError::UnknownLanguage("Elvish".to_string()).into();
    assert!(session.to_string().contains("Elvish"));
}
