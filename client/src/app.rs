//! Page shell and root application component.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::error::{ErrorPage, NotFoundPage};
use crate::pages::home::HomePage;
use crate::state::ui::UiState;
use crate::util::dark_mode;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Browser chrome color in light mode.
pub const LIGHT_THEME_COLOR: &str = "#3b82f6";
/// Browser chrome color when the OS prefers dark.
pub const DARK_THEME_COLOR: &str = "#1e293b";

/// HTML shell rendered on the server for SSR + hydration.
///
/// The root class comes from the theme resolved for this request so the first
/// paint already matches the stored preference.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let root_class = dark_mode::rendered_theme().root_class();

    view! {
        <!DOCTYPE html>
        <html lang="da" class=root_class>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="theme-color" content=LIGHT_THEME_COLOR/>
                <meta name="theme-color" content={DARK_THEME_COLOR} {..::leptos::tachys::html::attribute::custom::custom_attribute("media", "(prefers-color-scheme: dark)")}/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the UI state context and sets up client-side routing. Unknown
/// paths render the 404 page; any other render error falls back to the
/// generic error page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::with_theme(dark_mode::initial_theme()));
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>

        <Router>
            <ErrorBoundary fallback=|_| view! { <ErrorPage/> }>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </ErrorBoundary>
        </Router>
    }
}
