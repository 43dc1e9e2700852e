//! CYI HTTP Server Binary
//!
//! Entry point for the crop yield lookup REST API. It loads both datasets
//! once, builds the canonical tables, and serves queries over HTTP.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin cyi-server
//! ```
//!
//! # Environment Variables
//!
//! - `CYI_CONFIG`: Path to a cyi.toml config file
//! - `CYI_HISTORICAL_CSV` / `CYI_PREDICTIONS_CSV`: Dataset file paths
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use cyi_rust::config::AppConfig;
use cyi_rust::http::{create_router, AppState};
use cyi_rust::preprocessing;

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

    info!("Starting CYI HTTP Server");

    let config = AppConfig::load()?;

    // Build the canonical tables once; queries share them read-only.
    let result = preprocessing::load_dataset(
        &config.datasets.historical_csv,
        &config.datasets.predictions_csv,
    )?;
    info!(
        "Datasets loaded: {} historical rows, {} prediction rows",
        result.report.historical_rows, result.report.prediction_rows
    );

    let state = AppState::new(result.dataset, result.report);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
