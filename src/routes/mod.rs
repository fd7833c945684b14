//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the health check and static build output together
//! with Leptos SSR rendering under a single Axum router. Every rendered page,
//! including the not-found fallback, gets the theme resolved from the
//! request's cookies.

pub mod request_theme;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream_with_context};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;


/// Leptos SSR app + `/pkg` assets + `/healthz`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let shell = {
        let opts = leptos_options.clone();
        move || client::app::shell(opts.clone())
    };

    let leptos_router = Router::new()
        .leptos_routes_with_context(&leptos_options, routes, request_theme::provide_request_theme, shell.clone())
        .fallback(render_app_to_stream_with_context(request_theme::provide_request_theme, shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
