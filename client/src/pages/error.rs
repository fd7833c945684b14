//! Generic error page and the not-found route fallback.
//!
//! The page inherits the root class from the shell, which falls back to the
//! default theme when the render path never resolved one.

use leptos::prelude::*;

pub const NOT_FOUND_MESSAGE: &str = "404";
pub const NOT_FOUND_DETAILS: &str = "The requested page could not be found.";
pub const GENERIC_MESSAGE: &str = "Oops!";
pub const GENERIC_DETAILS: &str = "An unexpected error occurred.";

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[component]
pub fn ErrorPage(
    #[prop(into, default = GENERIC_MESSAGE.to_owned())] message: String,
    #[prop(into, default = GENERIC_DETAILS.to_owned())] details: String,
) -> impl IntoView {
    view! {
        <main class="error-page">
            <h1>{message}</h1>
            <p>{details}</p>
        </main>
    }
}

/// Router fallback for unknown paths. Sets a 404 status during SSR.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! { <ErrorPage message=NOT_FOUND_MESSAGE details=NOT_FOUND_DETAILS/> }
}
