//! Tutor Marketplace Site
//!
//! A Leptos SSR marketing website.

use axum::{routing::post, Extension, Router};
use leptos::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tutor_widgets::{TutorHooks, THEME_ACTION};

mod app;
mod components;
mod config;
mod intent;
mod listing;
mod pages;
mod theme;

use app::App;
use config::SiteConfig;
use listing::Listing;

/// Shared by page rendering and the intent endpoint
pub struct SiteState {
    pub listing: Listing,
    pub hooks: TutorHooks,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "tutor_site=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::default();
    let listing = match &config.listing_path {
        Some(path) => {
            tracing::info!("Loading tutor listing from {}", path.display());
            Listing::load(path)?
        }
        None => Listing::featured(),
    };
    tracing::info!(tutors = listing.tutors().len(), "Tutor listing ready");

    let state = Arc::new(SiteState {
        listing,
        hooks: intent::site_hooks(),
    });

    let conf = get_configuration(None).await?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let context_state = Arc::clone(&state);
    let app = Router::new()
        .route(components::INTENT_ACTION, post(intent::submit_intent))
        .route(THEME_ACTION, post(theme::set_theme))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(Arc::clone(&context_state)),
            App,
        )
        .fallback(leptos_axum::file_and_error_handler(App))
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Marketing site listening on http://{}", addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
