//! `Cookie` header parsing and the `theme` cookie wire format.
//!
//! The same parser handles a server request's `Cookie` header and a browser's
//! `document.cookie`, which share the `name=value; name=value` shape.

use std::fmt;

use crate::ThemePreference;

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Name of the cookie carrying the preference.
pub const COOKIE_NAME: &str = "theme";

/// One year, in seconds.
pub const COOKIE_MAX_AGE_SECS: u64 = 31_536_000;

/// Find the `theme` pair in a cookie header and parse its value.
///
/// Only the first pair named exactly `theme` is considered. Returns `None`
/// when that pair is missing or holds anything other than `light`/`dark`.
#[must_use]
pub fn cookie_theme(header: &str) -> Option<ThemePreference> {
    let value = header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| name.trim() == COOKIE_NAME)
        .map(|(_, value)| value.trim())?;
    value.parse().ok()
}

/// Resolve the theme to render for a request.
///
/// Total over every input: an absent header, a missing pair, or an
/// unrecognized value all yield the default ([`ThemePreference::Dark`]).
#[must_use]
pub fn resolve_for_request(header: Option<&str>) -> ThemePreference {
    header.and_then(cookie_theme).unwrap_or_default()
}

/// `theme=<value>; path=/; max-age=31536000; SameSite=Lax`
///
/// Written as-is to `document.cookie` by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeCookie(pub ThemePreference);

impl fmt::Display for ThemeCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{COOKIE_NAME}={}; path=/; max-age={COOKIE_MAX_AGE_SECS}; SameSite=Lax", self.0)
    }
}
