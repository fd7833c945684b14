//! Browser adapters for the theme preference stores.
//!
//! Implements the `theme` crate ports on top of `document.cookie`,
//! `localStorage` and the `dark` class on `<html>`. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! Outside the `hydrate` feature every adapter is inert: reads yield `None`
//! and writes report `StoreError::Unavailable`. SSR paths therefore stay
//! deterministic and never reach for browser globals.

use leptos::prelude::*;
use theme::{
    BootstrapAction, CookieStore, DomThemeMarker, LocalStore, StoreError, StoreKind, ThemePreference, ThemeStores,
};

#[cfg(feature = "hydrate")]
use theme::{DARK_CLASS, STORAGE_KEY, ThemeCookie};

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// `theme` cookie via `document.cookie`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookie;

/// `theme` key in `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

/// `dark` class on `document.documentElement`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RootClassMarker;

pub type BrowserStores = ThemeStores<DocumentCookie, BrowserStorage, RootClassMarker>;

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(feature = "hydrate")]
fn root_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

#[cfg(feature = "hydrate")]
fn rejected(store: StoreKind, err: &wasm_bindgen::JsValue) -> StoreError {
    StoreError::Rejected { store, reason: format!("{err:?}") }
}

impl CookieStore for DocumentCookie {
    fn theme(&self) -> Option<ThemePreference> {
        #[cfg(feature = "hydrate")]
        {
            let raw = html_document()?.cookie().ok()?;
            theme::cookie_theme(&raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set_theme(&self, theme: ThemePreference) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let doc = html_document().ok_or(StoreError::Unavailable(StoreKind::Cookie))?;
            doc.set_cookie(&ThemeCookie(theme).to_string())
                .map_err(|e| rejected(StoreKind::Cookie, &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
            Err(StoreError::Unavailable(StoreKind::Cookie))
        }
    }
}

impl LocalStore for BrowserStorage {
    fn theme(&self) -> Option<ThemePreference> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(STORAGE_KEY).ok().flatten()?;
            raw.parse().ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set_theme(&self, theme: ThemePreference) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StoreError::Unavailable(StoreKind::Local))?;
            storage
                .set_item(STORAGE_KEY, theme.as_str())
                .map_err(|e| rejected(StoreKind::Local, &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
            Err(StoreError::Unavailable(StoreKind::Local))
        }
    }
}

impl DomThemeMarker for RootClassMarker {
    fn theme(&self) -> Option<ThemePreference> {
        #[cfg(feature = "hydrate")]
        {
            let el = root_element()?;
            Some(ThemePreference::from_dark(el.class_list().contains(DARK_CLASS)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set_theme(&self, theme: ThemePreference) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let el = root_element().ok_or(StoreError::Unavailable(StoreKind::Marker))?;
            el.class_list()
                .toggle_with_force(DARK_CLASS, theme.is_dark())
                .map(|_| ())
                .map_err(|e| rejected(StoreKind::Marker, &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
            Err(StoreError::Unavailable(StoreKind::Marker))
        }
    }
}

#[must_use]
pub fn browser_stores() -> BrowserStores {
    ThemeStores::new(DocumentCookie, BrowserStorage, RootClassMarker)
}

/// Page-load sync: seed a missing cookie from `localStorage`.
///
/// Must run before hydration attaches handlers. Leaves `<html>` alone.
pub fn bootstrap() -> BootstrapAction {
    browser_stores().bootstrap()
}

/// Toggle the theme and persist it to all three stores.
pub fn toggle(current: ThemePreference) -> ThemePreference {
    browser_stores().toggle(current).theme
}

/// Theme the server resolved for this render, or the default when the render
/// path never resolved one (e.g. an error page).
pub fn rendered_theme() -> ThemePreference {
    use_context::<ThemePreference>().unwrap_or_default()
}

/// Theme the toggle control starts from.
///
/// In the browser this is whatever the server painted on `<html>`; during
/// SSR it is the resolved theme from context.
pub fn initial_theme() -> ThemePreference {
    RootClassMarker.theme().unwrap_or_else(rendered_theme)
}
