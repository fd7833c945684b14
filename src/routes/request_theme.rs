//! Per-request theme resolution for server rendering.
//!
//! Leptos provides the request `Parts` before calling the additional context
//! hook, so the resolved theme is available to the shell and every page,
//! error fallback included.

use axum::http::header::COOKIE;
use axum::http::request::Parts;
use leptos::prelude::*;
use theme::ThemePreference;

#[cfg(test)]
#[path = "request_theme_test.rs"]
mod request_theme_test;

/// Resolve the theme from a request's `Cookie` header(s).
///
/// HTTP/2 clients may split cookies across several `Cookie` headers; they are
/// joined back into one list before parsing.
pub fn theme_from_parts(parts: &Parts) -> ThemePreference {
    let header = parts
        .headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect::<Vec<_>>()
        .join("; ");
    theme::resolve_for_request((!header.is_empty()).then_some(header.as_str()))
}

/// Leptos context hook: resolve the request theme and provide it.
pub fn provide_request_theme() {
    let theme = use_context::<Parts>()
        .map(|parts| theme_from_parts(&parts))
        .unwrap_or_default();
    tracing::debug!(%theme, "resolved request theme");
    provide_context(theme);
}
