//! Plotrate Server Binary
//!
//! Serves the property price converter API and the cached exchange rate proxy.

use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use plotrate_common::time::{constants, DurationExt};
use plotrate_fx::{FixerProvider, RateService, SnapshotCache};
use plotrate_server::{routes, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Starting Plotrate server");

    // Load configuration
    let config = ServerConfig::from_env();
    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(anyhow::anyhow!("Configuration error: {}", e));
    }
    if config.fixer_api_key.is_none() {
        warn!("FIXER_API_KEY is not set; rate requests will fail until it is provided");
    }

    let client = reqwest::Client::builder()
        .timeout(constants::upstream_request_timeout().as_std())
        .build()?;
    let provider = Arc::new(FixerProvider::new(
        client,
        config.fixer_base_url.clone(),
        config.fixer_api_key.clone(),
    ));
    let state = AppState::new(Arc::new(RateService::new(provider, SnapshotCache::new())));

    let app = routes::router(state);
    let addr = format!("{}:{}", config.listen_addr, config.listen_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(listen_addr = %addr, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");
    info!("Shutdown signal received");
}
