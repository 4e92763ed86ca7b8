use anyhow::Context;
use clap::Parser;
use memora_core::config::{AnalyticsConfig, GenerationMode};
use memora_http::{self, server::ServerConfig};
use std::path::PathBuf;

/// Memora HTTP API Server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, env = "MEMORA_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "MEMORA_PORT", default_value_t = 3000)]
    port: u16,

    /// Log level (error, warn, info, debug, trace) or a tracing filter directive
    #[arg(short, long, env = "MEMORA_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// JSON analytics configuration file
    #[arg(short, long, env = "MEMORA_CONFIG")]
    config: Option<PathBuf>,

    /// JSON memory catalog, overrides the one named in the configuration
    #[arg(long, env = "MEMORA_CATALOG")]
    catalog: Option<PathBuf>,

    /// Generation mode for synthetic statistics (hybrid, seeded)
    #[arg(short, long, env = "MEMORA_MODE")]
    mode: Option<GenerationMode>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    memora_http::init_tracing(&cli.log_level);

    let mut analytics = match &cli.config {
        Some(file) => AnalyticsConfig::from_file(file)
            .with_context(|| format!("loading configuration from {}", file.display()))?,
        None => AnalyticsConfig::default(),
    };
    if let Some(catalog) = cli.catalog {
        analytics.catalog_path = Some(catalog);
    }
    if let Some(mode) = cli.mode {
        analytics.generation_mode = mode;
    }

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        analytics,
    };

    tracing::info!(
        "Starting Memora HTTP server on {}:{}",
        config.host,
        config.port
    );
    memora_http::start_with_config(config)
        .await
        .map_err(|e| anyhow::anyhow!("server error: {}", e))?;

    Ok(())
}
