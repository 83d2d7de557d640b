//! Delaycast HTTP Server Binary
//!
//! Entry point for the prediction server. It loads the configuration,
//! builds the prediction context, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! SERPAPI_KEY=... cargo run --bin delaycast-server
//!
//! # Or with a TOML config file
//! DELAYCAST_CONFIG=delaycast.toml cargo run --bin delaycast-server
//! ```
//!
//! # Environment Variables
//!
//! - `DELAYCAST_CONFIG`: path to a TOML config file (optional; env vars
//!   are used when unset, see [`AppConfig::from_env`])
//! - `RUST_LOG`: log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use delaycast::config::AppConfig;
use delaycast::http::{create_router, AppState};
use delaycast::search::GoogleFlightsClient;
use delaycast::services::PredictionContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Delaycast HTTP Server");

    let config = match env::var("DELAYCAST_CONFIG") {
        Ok(path) => AppConfig::from_file(Path::new(&path)).map_err(|e| anyhow::anyhow!(e))?,
        Err(_) => AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?,
    };

    // Load the mapping table, model and airport table once; everything is
    // immutable afterwards and shared across requests.
    let ctx = Arc::new(PredictionContext::load(&config)?);
    info!(
        "Prediction context loaded: {} model, {} airports",
        ctx.classifier.kind(),
        ctx.airports.len()
    );

    let search = Arc::new(
        GoogleFlightsClient::new(config.search_api_key.clone())
            .with_base_url(config.search_base_url.clone()),
    );

    let state = AppState::new(ctx, search);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
