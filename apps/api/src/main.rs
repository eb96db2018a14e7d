mod config;
mod errors;
mod extract;
mod models;
mod normalize;
mod profile;
mod routes;
mod search;
mod state;
mod talent_client;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::routes::cors::cors_layer;
use crate::state::AppState;
use crate::talent_client::TorreClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting talent proxy v{}", env!("CARGO_PKG_VERSION"));

    let client = TorreClient::new(&config).context("Failed to build HTTP client")?;
    match config.upstream_timeout {
        Some(timeout) => info!("Talent client initialized (timeout: {:?})", timeout),
        None => info!("Talent client initialized (no timeout)"),
    }

    let cors = cors_layer(&config)?;
    if !config.frontend_url.is_empty() {
        info!("Extra CORS origin: {}", config.frontend_url);
    }

    let state = AppState {
        directory: Arc::new(client),
    };

    let app = build_router(state, cors).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
