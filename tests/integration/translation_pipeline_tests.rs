/*!
 * End-to-end tests of the submit pipeline over mock providers
 */

use std::sync::Arc;

use smart_translator::language_catalog::AUTO_DETECT_NAME;
use smart_translator::providers::mock::{MockBehavior, MockDetector, MockSpeech, MockTranslator};
use smart_translator::translation::{TRANSLATION_ERROR_PREFIX, UNKNOWN_LANGUAGE};
use smart_translator::{Banner, SessionState, Theme, TranslationClient};

use crate::common::{create_temp_dir, MockedApp};

fn auto_to_hindi() -> SessionState {
    SessionState::new(AUTO_DETECT_NAME, "Hindi", Theme::Light).unwrap()
}

/// Empty input never reaches a provider
#[tokio::test]
async fn test_submit_withEmptyText_shouldWarnWithoutCallingProviders() {
    let dir = create_temp_dir().unwrap();
    let app = MockedApp::working(dir.path());

    let outcome = app.controller.submit(&SessionState::default(), "").await;

    assert_eq!(
        outcome.banners,
        vec![Banner::Warning("Please enter some text to translate.".to_string())]
    );
    assert!(outcome.translated_text.is_none());
    assert!(outcome.audio.is_none());
    assert_eq!(app.total_calls(), 0);
}

/// Detected source flows into translation; target flows into synthesis
#[tokio::test]
async fn test_submit_withAutoDetect_shouldDetectTranslateAndSpeak() {
    let dir = create_temp_dir().unwrap();
    let app = MockedApp::working(dir.path());

    let outcome = app.controller.submit(&auto_to_hindi(), "Hello").await;

    assert_eq!(app.detector.call_count(), 1);
    assert_eq!(app.detector.requests(), vec!["Hello".to_string()]);

    let requests = app.translator.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].source.as_deref(), Some("en"));
    assert_eq!(requests[0].target, "hi");

    assert_eq!(outcome.banners, vec![Banner::Info("Detected Language: English".to_string())]);
    assert_eq!(outcome.translated_text.as_deref(), Some("[en->hi] Hello"));

    let speech = app.speech.requests();
    assert_eq!(speech, vec![("[en->hi] Hello".to_string(), "hi".to_string())]);

    let audio = outcome.audio.expect("audio artifact");
    assert!(audio.file_path.ends_with("translated.mp3"));
    assert_eq!(audio.mime_type, "audio/mp3");
    assert_eq!(std::fs::read(&audio.file_path).unwrap(), MockSpeech::AUDIO);
}

/// A failing translator is reported and nothing is spoken
#[tokio::test]
async fn test_submit_withFailingTranslator_shouldReportErrorAndSkipSpeech() {
    let dir = create_temp_dir().unwrap();
    let app = MockedApp::new(
        dir.path(),
        MockDetector::returning("en"),
        MockTranslator::failing(),
        MockSpeech::working(),
    );

    let outcome = app.controller.submit(&SessionState::default(), "Hello").await;

    assert!(!outcome.is_success());
    match outcome.banners.as_slice() {
        [Banner::Error(message)] => {
            assert!(message.starts_with("Translation Error: "));
            assert!(message.contains("Simulated provider failure"));
        }
        other => panic!("unexpected banners: {:?}", other),
    }
    assert_eq!(app.speech.call_count(), 0);
    assert!(!dir.path().join("translated.mp3").exists());
}

/// The string-returning entry point folds failures into its text
#[tokio::test]
async fn test_translationClient_translate_withFailingProvider_shouldReturnErrorText() {
    let client = TranslationClient::new(Arc::new(MockTranslator::failing()));

    let text = client.translate("Hello", "hi", "en").await;

    assert!(text.starts_with(TRANSLATION_ERROR_PREFIX));
    assert!(text.contains("Simulated provider failure"));
}

/// Detection failure degrades to "unknown" and translation still runs
#[tokio::test]
async fn test_submit_withFailingDetector_shouldStillTranslate() {
    let dir = create_temp_dir().unwrap();
    let app = MockedApp::new(
        dir.path(),
        MockDetector::failing(),
        MockTranslator::working(),
        MockSpeech::working(),
    );

    let outcome = app.controller.submit(&auto_to_hindi(), "Hello there").await;

    let detected = outcome.detected_language.as_ref().expect("detected language");
    assert_eq!(detected.code, UNKNOWN_LANGUAGE);
    assert_eq!(outcome.banners[0], Banner::Info("Detected Language: unknown".to_string()));
    assert_eq!(app.translator.call_count(), 1);
    assert!(outcome.is_success());
}

/// Text shorter than the detection threshold skips the detector
#[tokio::test]
async fn test_submit_withShortAutoText_shouldNotCallDetector() {
    let dir = create_temp_dir().unwrap();
    let app = MockedApp::working(dir.path());

    let outcome = app.controller.submit(&auto_to_hindi(), "Hi").await;

    assert_eq!(app.detector.call_count(), 0);
    assert_eq!(outcome.detected_language.unwrap().code, UNKNOWN_LANGUAGE);
    assert_eq!(app.translator.call_count(), 1);
}

/// Synthesis failure hides the audio but keeps the translation
#[tokio::test]
async fn test_submit_withFailingSpeech_shouldOmitAudioSilently() {
    let dir = create_temp_dir().unwrap();
    let app = MockedApp::new(
        dir.path(),
        MockDetector::returning("en"),
        MockTranslator::working(),
        MockSpeech::failing(),
    );

    let outcome = app.controller.submit(&SessionState::default(), "Hello").await;

    assert_eq!(outcome.translated_text.as_deref(), Some("[en->hi] Hello"));
    assert!(outcome.audio.is_none());
    assert!(outcome.banners.iter().all(|b| !matches!(b, Banner::Error(_))));
}

/// An empty translation counts as a failure
#[tokio::test]
async fn test_submit_withEmptyTranslation_shouldReportError() {
    let dir = create_temp_dir().unwrap();
    let app = MockedApp::new(
        dir.path(),
        MockDetector::returning("en"),
        MockTranslator::new(MockBehavior::Empty),
        MockSpeech::working(),
    );

    let outcome = app.controller.submit(&SessionState::default(), "Hello").await;

    assert!(matches!(outcome.banners.as_slice(), [Banner::Error(m)] if m.contains("empty translation")));
    assert_eq!(app.speech.call_count(), 0);
}

/// Each submit stands alone: a failure between successes leaves no trace
#[tokio::test]
async fn test_submit_withIntermittentTranslator_shouldRecoverOnNextSubmit() {
    let dir = create_temp_dir().unwrap();
    let app = MockedApp::new(
        dir.path(),
        MockDetector::returning("en"),
        MockTranslator::new(MockBehavior::Intermittent { fail_every: 2 }),
        MockSpeech::working(),
    );
    let state = SessionState::default();

    let first = app.controller.submit(&state, "One").await;
    let second = app.controller.submit(&state, "Two").await;
    let third = app.controller.submit(&state, "Three").await;

    assert_eq!(first.translated_text.as_deref(), Some("[en->hi] One"));
    assert!(matches!(second.banners.as_slice(), [Banner::Error(_)]));
    assert!(second.audio.is_none());
    assert_eq!(third.translated_text.as_deref(), Some("[en->hi] Three"));
    assert!(third.banners.is_empty());
    assert_eq!(app.translator.call_count(), 3);
    assert_eq!(app.speech.call_count(), 2);
}
