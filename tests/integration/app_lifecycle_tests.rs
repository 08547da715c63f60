/*!
 * Tests of configuration loading and interactive session cycles
 */

use smart_translator::app_config::Config;
use smart_translator::language_catalog::AUTO_DETECT_NAME;
use smart_translator::{Banner, SessionController, SessionState, Theme};

use crate::common::{create_temp_dir, MockedApp};

/// A missing config file is created with defaults
#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");

    let config = Config::load_or_create(path.to_str().unwrap()).unwrap();

    assert!(path.exists());
    assert_eq!(config.source_language, "English");
    assert_eq!(config.target_language, "Hindi");

    let reloaded = Config::load_or_create(path.to_str().unwrap()).unwrap();
    assert_eq!(reloaded.target_language, config.target_language);
    assert_eq!(reloaded.audio.file_name, config.audio.file_name);
}

/// An existing config file is read back as written
#[test]
fn test_loadOrCreate_withExistingFile_shouldReadIt() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");
    std::fs::write(&path, r#"{ "source_language": "Auto Detect", "target_language": "Tamil" }"#).unwrap();

    let config = Config::load_or_create(path.to_str().unwrap()).unwrap();

    assert_eq!(config.source_language, AUTO_DETECT_NAME);
    assert_eq!(config.target_language, "Tamil");
    assert!(config.validate().is_ok());
}

/// A swap requested between submits changes the direction of the next one
#[tokio::test]
async fn test_sessionCycle_withSwapBetweenSubmits_shouldReverseDirection() {
    let dir = create_temp_dir().unwrap();
    let app = MockedApp::working(dir.path());
    let mut session = SessionController::new(SessionState::new("English", "French", Theme::Light).unwrap());

    session.begin_cycle();
    let first = app.controller.submit(session.state(), "Hello").await;
    assert_eq!(first.translated_text.as_deref(), Some("[en->fr] Hello"));

    session.swap();
    session.begin_cycle();
    let second = app.controller.submit(session.state(), "Bonjour").await;
    assert_eq!(second.translated_text.as_deref(), Some("[fr->en] Bonjour"));
}

/// Swap with auto-detect as source leaves the selection untouched
#[tokio::test]
async fn test_sessionCycle_withAutoDetectSwap_shouldKeepSelection() {
    let dir = create_temp_dir().unwrap();
    let app = MockedApp::working(dir.path());
    let mut session = SessionController::new(SessionState::new(AUTO_DETECT_NAME, "Hindi", Theme::Dark).unwrap());

    session.swap();
    assert!(!session.begin_cycle());
    assert_eq!(session.state().source_language, AUTO_DETECT_NAME);
    assert!(!session.state().swap_pending);

    let outcome = app.controller.submit(session.state(), "Hello").await;
    assert!(matches!(&outcome.banners[0], Banner::Info(m) if m == "Detected Language: English"));
}

/// Saved audio lands at the requested download path
#[tokio::test]
async fn test_saveAudio_afterSubmit_shouldCopyToDestination() {
    let dir = create_temp_dir().unwrap();
    let app = MockedApp::working(dir.path());

    let outcome = app.controller.submit(&SessionState::default(), "Hello").await;
    let audio = outcome.audio.unwrap();
    let destination = dir.path().join("translated_audio.mp3");

    let saved = app.controller.save_audio(&audio, Some(&destination)).unwrap();

    assert_eq!(saved, destination);
    assert_eq!(std::fs::read(&saved).unwrap(), std::fs::read(&audio.file_path).unwrap());
}

/// Blocking runner works for one-shot callers
#[test]
fn test_submit_withBlockOn_shouldTranslate() {
    let dir = create_temp_dir().unwrap();
    let app = MockedApp::working(dir.path());

    let outcome = tokio_test::block_on(app.controller.submit(&SessionState::default(), "Hello"));

    assert!(outcome.is_success());
    assert!(outcome.audio.is_some());
}
