use axum::Router;
use memora_core::InternalResult;
use memora_core::catalog::{MemoryCatalog, StaticCatalog};
use memora_core::config::AnalyticsConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::routes::create_api_router;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Analytics configuration
    pub analytics: AnalyticsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            analytics: AnalyticsConfig::default(),
        }
    }
}

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn MemoryCatalog>,
    pub config: Arc<AnalyticsConfig>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn MemoryCatalog>, config: AnalyticsConfig) -> Self {
        Self {
            catalog,
            config: Arc::new(config),
        }
    }

    /// Build the state, loading the catalog file named in the config if any
    pub fn from_config(config: AnalyticsConfig) -> InternalResult<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                info!("Loading memory catalog from {}", path.display());
                StaticCatalog::from_file(path)?
            }
            None => StaticCatalog::sample(),
        };
        info!(
            "Memory catalog ready with {} records",
            catalog.records().len()
        );
        Ok(Self::new(Arc::new(catalog), config))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(StaticCatalog::sample()), AnalyticsConfig::default())
    }
}

/// The full application: routes, state, tracing and CORS
pub fn create_app(state: AppState) -> Router {
    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_api_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::from_config(config.analytics)?;
    info!("Generation mode: {}", state.config.generation_mode);

    let app = create_app(state);

    // Parse the socket address
    let addr = format!("{}:{}", config.host, config.port).parse::<SocketAddr>()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
