//! BaZi HTTP Server Binary
//!
//! Entry point for the BaZi REST API server.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin bazi-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8081)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use bazi_service::config::ServerConfig;
use bazi_service::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting BaZi HTTP Server");

    let config = ServerConfig::from_env();
    let app = create_router(AppState::default());

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("BaZi service listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
