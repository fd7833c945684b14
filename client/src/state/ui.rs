//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns such as the active theme in one context value
//! so any component can read what the toggle last applied.

use theme::ThemePreference;

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared by the page chrome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Theme currently painted on `<html>`.
    pub theme: ThemePreference,
}

impl UiState {
    #[must_use]
    pub fn with_theme(theme: ThemePreference) -> Self {
        Self { theme }
    }

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.theme.is_dark()
    }
}
