#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn adapters_read_nothing_outside_the_browser() {
    assert_eq!(DocumentCookie.theme(), None);
    assert_eq!(BrowserStorage.theme(), None);
    assert_eq!(RootClassMarker.theme(), None);
}

#[test]
fn adapters_report_unavailable_on_write() {
    assert_eq!(
        DocumentCookie.set_theme(ThemePreference::Light),
        Err(StoreError::Unavailable(StoreKind::Cookie))
    );
    assert_eq!(BrowserStorage.set_theme(ThemePreference::Light), Err(StoreError::Unavailable(StoreKind::Local)));
    assert_eq!(
        RootClassMarker.set_theme(ThemePreference::Light),
        Err(StoreError::Unavailable(StoreKind::Marker))
    );
}

#[test]
fn toggle_flips_value_even_when_stores_are_missing() {
    assert_eq!(toggle(ThemePreference::Dark), ThemePreference::Light);
    assert_eq!(toggle(ThemePreference::Light), ThemePreference::Dark);
}

#[test]
fn toggle_reports_every_store_as_failed() {
    let outcome = browser_stores().toggle(ThemePreference::Dark);
    assert_eq!(outcome.failures.len(), 3);
    assert!(!outcome.is_consistent());
}

#[test]
fn bootstrap_is_noop_without_stores() {
    assert_eq!(bootstrap(), BootstrapAction::None);
}

#[test]
fn rendered_theme_defaults_without_context() {
    assert_eq!(rendered_theme(), ThemePreference::Dark);
    assert_eq!(initial_theme(), ThemePreference::Dark);
}

#[test]
fn rendered_theme_reads_provided_context() {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(ThemePreference::Light);
        assert_eq!(rendered_theme(), ThemePreference::Light);
        assert_eq!(initial_theme(), ThemePreference::Light);
    });
}
