//! hass-dashboard - Home Assistant dashboard proxy
//!
//! A small proxy in front of a Home Assistant instance: forwards device
//! listing and command calls to the hub's REST API and serves the polling
//! dashboard UI.

mod api;
mod config;
mod error;
mod hass;
mod models;

use std::net::SocketAddr;

use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::AppState;
use crate::hass::HassClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hass_dashboard=info,tower_http=debug".into()),
        )
        .init();

    tracing::info!("Starting hass-dashboard...");

    // Load configuration
    let config = config::Config::load()?;

    // Initialize the Home Assistant client
    let hass = match config.token() {
        Some(token) => {
            tracing::info!("Home Assistant client configured for: {}", config.ha_url);
            Some(HassClient::new(config.ha_url.clone(), token))
        }
        None => {
            tracing::warn!("HA_TOKEN not set. Hub-dependent API routes will answer 503.");
            tracing::warn!("Set HA_URL and HA_TOKEN in the environment to connect to your hub.");
            None
        }
    };

    let app_state = AppState::new(hass);

    // Static dashboard assets with SPA fallback to the entry document
    let index = format!("{}/index.html", config.static_dir);
    let static_assets = ServeDir::new(&config.static_dir).fallback(ServeFile::new(index));

    // Build application router
    let app = api::routes()
        .fallback_service(static_assets)
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        );

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);
    tracing::info!(
        "Home Assistant URL: {} (token configured: {})",
        config.ha_url,
        if config.token().is_some() { "yes" } else { "no" }
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
