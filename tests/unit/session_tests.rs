/*!
 * Tests for session state transitions and the session controller
 */

use smart_translator::language_catalog::AUTO_DETECT_NAME;
use smart_translator::{SessionController, SessionError, SessionState, Theme};

#[test]
fn test_sessionState_new_withSentinelTarget_shouldFail() {
    let result = SessionState::new("English", AUTO_DETECT_NAME, Theme::Light);
    assert!(matches!(result, Err(SessionError::SentinelTarget(_))));
}

#[test]
fn test_sessionState_new_withUnknownSource_shouldFail() {
    let result = SessionState::new("Quenya", "Hindi", Theme::Light);
    assert_eq!(result, Err(SessionError::UnknownLanguage("Quenya".to_string())));
}

/// Swap is self-inverse when a cycle runs in between
#[test]
fn test_sessionController_swapTwice_withCycles_shouldRestorePair() {
    let state = SessionState::new("French", "Japanese", Theme::Dark).unwrap();
    let mut controller = SessionController::new(state.clone());

    controller.swap();
    assert!(controller.begin_cycle());
    assert_eq!(controller.state().source_language, "Japanese");
    assert_eq!(controller.state().target_language, "French");

    controller.swap();
    assert!(controller.begin_cycle());
    assert_eq!(controller.state(), &state);
}

/// Requests before a cycle collapse into one swap
#[test]
fn test_sessionController_swapTwice_withoutCycle_shouldApplyOnce() {
    let mut controller = SessionController::default();
    controller.swap();
    controller.swap();

    assert!(controller.begin_cycle());
    assert!(!controller.begin_cycle());
    assert_eq!(controller.state().source_language, "Hindi");
}

#[test]
fn test_sessionController_selections_shouldKeepInvariants() {
    let mut controller = SessionController::default();

    assert!(controller.select_source(AUTO_DETECT_NAME).is_ok());
    assert!(controller.select_target(AUTO_DETECT_NAME).is_err());
    assert!(controller.select_target("Tamil").is_ok());

    assert_eq!(controller.state().source_language, AUTO_DETECT_NAME);
    assert_eq!(controller.state().target_language, "Tamil");
}

#[test]
fn test_sessionController_toggleTheme_shouldAlternate() {
    let mut controller = SessionController::default();
    assert_eq!(controller.toggle_theme(), Theme::Dark);
    assert_eq!(controller.toggle_theme(), Theme::Light);
}
