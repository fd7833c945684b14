//! Light/dark toggle button.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server already painted `<html>` with the resolved theme. The button's
//! markup does not depend on the theme (both glyphs are rendered and CSS keyed
//! on `.dark` picks one), so hydration never sees a mismatch.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        let current = ui.get_untracked().theme;
        let next = dark_mode::toggle(current);
        ui.update(|u| u.theme = next);
    };

    view! {
        <button type="button" class="theme-toggle" aria-label="Toggle theme" on:click=on_click>
            <span class="theme-toggle__sun" aria-hidden="true">"☀"</span>
            <span class="theme-toggle__moon" aria-hidden="true">"☾"</span>
        </button>
    }
}
