//! Landing page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::theme_toggle::ThemeToggle;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio"/>
        <div class="landing">
            <header class="landing__header">
                <ThemeToggle/>
            </header>
            <main class="landing__main">
                <h1>"Portfolio"</h1>
            </main>
        </div>
    }
}
