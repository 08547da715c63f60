/*!
 * Session controller for the interactive translator form.
 *
 * This module handles:
 * - Deferred swap requests applied at the start of the next cycle
 * - Theme toggling
 * - Validated language selection
 */

use log::{debug, warn};

use crate::errors::SessionError;

use super::models::{SessionState, Theme};

/// Owns the session state across interaction cycles
#[derive(Debug, Clone, Default)]
pub struct SessionController {
    state: SessionState,
}

impl SessionController {
    /// Create a controller around an initial state
    pub fn new(state: SessionState) -> Self {
        Self { state }
    }

    /// Current state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Request a swap of source and target
    ///
    /// The exchange is applied by the next call to [`begin_cycle`](Self::begin_cycle).
    /// Requesting twice before that still yields a single swap.
    pub fn swap(&mut self) {
        self.request_swap();
    }

    /// Set the pending swap flag
    pub fn request_swap(&mut self) {
        self.state.swap_pending = true;
    }

    /// Start an interaction cycle, consuming a pending swap
    ///
    /// Returns whether an exchange was applied.
    pub fn begin_cycle(&mut self) -> bool {
        if !self.state.swap_pending {
            return false;
        }
        self.state.swap_pending = false;

        match self.state.swapped() {
            Some(next) => {
                debug!(
                    "Swapped languages: {} -> {}",
                    next.source_language, next.target_language
                );
                self.state = next;
                true
            }
            None => {
                warn!(
                    "Cannot swap while the source is '{}'; pick a source language first",
                    self.state.source_language
                );
                false
            }
        }
    }

    /// Flip the theme
    pub fn toggle_theme(&mut self) -> Theme {
        self.state = self.state.with_theme_toggled();
        self.state.theme
    }

    /// Change the source language
    pub fn select_source(&mut self, display_name: &str) -> Result<(), SessionError> {
        self.state = self.state.with_source(display_name)?;
        Ok(())
    }

    /// Change the target language
    pub fn select_target(&mut self, display_name: &str) -> Result<(), SessionError> {
        self.state = self.state.with_target(display_name)?;
        Ok(())
    }
}
