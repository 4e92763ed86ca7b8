//! Memora HTTP API Server
//!
//! This crate serves the Memora analytics views (similar memories, validator
//! performance and value history) as JSON over HTTP.

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;

use server::{ServerConfig, start_server};

/// Start the Memora HTTP server with the default configuration
pub async fn start() -> Result<(), Box<dyn std::error::Error>> {
    start_server(ServerConfig::default()).await
}

/// Start the Memora HTTP server with a custom configuration
pub async fn start_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    start_server(config).await
}

/// Install the global tracing subscriber. `filter` uses `EnvFilter` syntax,
/// e.g. `info` or `memora_http=debug,tower_http=info`.
pub fn init_tracing(filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_new(filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // a subscriber may already be installed, e.g. by an embedding application
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
