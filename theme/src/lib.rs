//! Light/dark theme preference shared by the server renderer and the browser.
//!
//! This crate is UI-framework agnostic. The server uses it to resolve the
//! theme from an incoming `Cookie` header before rendering, and the client
//! uses it to keep the cookie, `localStorage`, and the root element class in
//! agreement when the user toggles.
//!
//! DESIGN
//! ======
//! The cookie is the source of truth for server rendering. The client-local
//! store may seed a missing cookie but never overwrites one. Browser globals
//! are reached only through the [`CookieStore`], [`LocalStore`] and
//! [`DomThemeMarker`] ports so the logic runs without a browser.

pub mod cookie;
pub mod sync;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use cookie::{COOKIE_MAX_AGE_SECS, COOKIE_NAME, ThemeCookie, cookie_theme, resolve_for_request};
pub use sync::{
    BootstrapAction, CookieStore, DomThemeMarker, LocalStore, StoreError, StoreKind, ThemeStores, ToggleOutcome,
    WriteFailure, bootstrap_sync,
};

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

/// Key under which the client-local store keeps the preference.
pub const STORAGE_KEY: &str = "theme";

/// Class placed on the document root element while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// Error returned when a string is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized theme: {0:?}")]
pub struct ParseThemeError(pub String);

/// The persisted display-mode choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    /// Applied on first visit and whenever no valid preference is stored.
    #[default]
    Dark,
}

impl ThemePreference {
    /// Wire/text form, exactly `"light"` or `"dark"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite preference. Applying it twice returns the original.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Class attribute for the document root: `"dark"` or empty.
    #[must_use]
    pub fn root_class(self) -> &'static str {
        if self.is_dark() { DARK_CLASS } else { "" }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ParseThemeError;

    /// Exact match only: no trimming, no case folding.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}
