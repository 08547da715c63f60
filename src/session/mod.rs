/*!
 * Interactive session state for the translator form.
 *
 * This module provides:
 * - The session state value and its pure transitions
 * - The controller owning that state across interaction cycles
 */

pub mod manager;
pub mod models;

// Re-export main types
pub use manager::SessionController;
pub use models::{SessionState, Theme};
