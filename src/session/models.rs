/*!
 * Session state and its pure transitions.
 *
 * Every transition takes the current state and returns the next one, so the
 * presentation layer can own a single value instead of hidden globals.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::SessionError;
use crate::language_catalog::{LanguageCatalog, AUTO_DETECT_NAME};

/// Colour theme of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "Light"),
            Theme::Dark => write!(f, "Dark"),
        }
    }
}

/// Ephemeral selections of one user session
///
/// `source_language` and `target_language` are always catalog display names,
/// and the target is never the auto-detect sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Selected source language display name
    pub source_language: String,
    /// Selected target language display name
    pub target_language: String,
    /// A swap was requested and waits for the next cycle
    pub swap_pending: bool,
    /// Current theme
    pub theme: Theme,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            source_language: "English".to_string(),
            target_language: "Hindi".to_string(),
            swap_pending: false,
            theme: Theme::Light,
        }
    }
}

impl SessionState {
    /// Build a state from explicit selections, validating both of them
    pub fn new(source: &str, target: &str, theme: Theme) -> Result<Self, SessionError> {
        Self::default()
            .with_source(source)?
            .with_target(target)
            .map(|state| Self { theme, ..state })
    }

    /// Source and target exchanged
    ///
    /// Returns `None` when the source is the auto-detect sentinel, since it
    /// would land in the target slot.
    pub fn swapped(&self) -> Option<Self> {
        if self.source_language == AUTO_DETECT_NAME {
            return None;
        }
        Some(Self {
            source_language: self.target_language.clone(),
            target_language: self.source_language.clone(),
            ..self.clone()
        })
    }

    /// Theme flipped
    pub fn with_theme_toggled(&self) -> Self {
        Self {
            theme: self.theme.toggled(),
            ..self.clone()
        }
    }

    /// New source selection
    pub fn with_source(&self, display_name: &str) -> Result<Self, SessionError> {
        if !LanguageCatalog::contains(display_name) {
            return Err(SessionError::UnknownLanguage(display_name.to_string()));
        }
        Ok(Self {
            source_language: display_name.to_string(),
            ..self.clone()
        })
    }

    /// New target selection; the sentinel is rejected
    pub fn with_target(&self, display_name: &str) -> Result<Self, SessionError> {
        if display_name == AUTO_DETECT_NAME {
            return Err(SessionError::SentinelTarget(display_name.to_string()));
        }
        if !LanguageCatalog::contains(display_name) {
            return Err(SessionError::UnknownLanguage(display_name.to_string()));
        }
        Ok(Self {
            target_language: display_name.to_string(),
            ..self.clone()
        })
    }

    /// Provider code of the source selection
    pub fn source_code(&self) -> &'static str {
        LanguageCatalog::resolve_code(&self.source_language)
    }

    /// Provider code of the target selection
    pub fn target_code(&self) -> &'static str {
        LanguageCatalog::resolve_target_code(&self.target_language)
    }
}
