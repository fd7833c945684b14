use super::*;

#[test]
fn ui_state_default_dark_mode_on() {
    let state = UiState::default();
    assert!(state.dark_mode());
    assert_eq!(state.theme, ThemePreference::Dark);
}

#[test]
fn ui_state_with_light_theme() {
    let state = UiState::with_theme(ThemePreference::Light);
    assert!(!state.dark_mode());
}
