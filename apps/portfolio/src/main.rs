mod config;
mod contact;
mod errors;
mod page;
mod particles;
mod reveal;
mod routes;
mod state;
mod viewport;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::RelayClient;
use crate::particles::ParticleController;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; a missing relay key is not fatal here
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    // Initialize form relay client
    let relay = RelayClient::new(
        config.form_relay_access_key.clone(),
        config.form_relay_timeout,
    )
    .context("Failed to build form relay HTTP client")?;
    if !relay.has_access_key() {
        warn!("WEB3FORMS_ACCESS_KEY is not set; contact submissions will be refused");
    }

    // Kick off the one-time particle engine load; requests see NOT_READY until it lands
    let particles = ParticleController::global();
    tokio::spawn({
        let particles = particles.clone();
        async move {
            particles.initialize_once().await;
        }
    });

    let state = AppState {
        config: config.clone(),
        relay: Arc::new(relay),
        particles,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
