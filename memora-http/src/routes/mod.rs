pub mod analytics;

use crate::handlers;
use crate::models::{
    CategoryCount, EarningsPoint, ErrorResponse, MemoryRecord, SimilarMemories, SimilarMemory,
    StakePoint, ValidationPoint, ValidatorStats, ValueHistory,
};
use crate::server::AppState;
use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::similarity::get_similar_memories,
        handlers::validator::get_validator_performance,
        handlers::value_history::get_value_history
    ),
    components(schemas(
        MemoryRecord,
        SimilarMemory,
        SimilarMemories,
        ValidatorStats,
        EarningsPoint,
        ValidationPoint,
        CategoryCount,
        StakePoint,
        ValueHistory,
        ErrorResponse
    )),
    tags(
        (name = "analytics", description = "Memory market analytics")
    )
)]
pub struct ApiDoc;

/// Create the main API router with state
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health_check))
        .merge(analytics::routes())
}

/// Health check endpoint for container health monitoring
async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}
