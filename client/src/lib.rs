//! # client
//!
//! Leptos frontend for the portfolio site.
//!
//! This crate contains the page shell, routes, the theme toggle, and the
//! browser adapters that keep the theme cookie, `localStorage`, and the
//! `<html>` class in sync. Built with `ssr` for the server and `hydrate` for
//! the WASM bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point.
///
/// Runs the theme bootstrap sync before hydration so it completes before any
/// event handler is attached.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let action = util::dark_mode::bootstrap();
    log::info!("theme bootstrap: {action:?}");

    leptos::mount::hydrate_body(app::App);
}
