use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Json,
};
use memora_core::similarity::{SimilarMemories, find_similar};

use crate::error::AppError;
use crate::handlers::required_id;
use crate::models::{ErrorResponse, SimilarMemoriesQuery};
use crate::server::AppState;

/// Similar memories
///
/// Ranks every other catalog memory against the requested one by fingerprint
/// similarity plus shared brain region and memory type.
#[utoipa::path(
    get,
    path = "/similar-memories",
    params(SimilarMemoriesQuery),
    responses(
        (status = 200, description = "Similar memories ranked best first", body = SimilarMemories),
        (status = 400, description = "Missing memory id or invalid limit", body = ErrorResponse),
        (status = 404, description = "Memory not found", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_similar_memories(
    State(state): State<AppState>,
    query: Result<Query<SimilarMemoriesQuery>, QueryRejection>,
) -> Result<Json<SimilarMemories>, AppError> {
    let Query(query) = query?;
    let id = required_id(query.id, "Memory ID is required")?;
    let limit = parse_limit(query.limit.as_deref(), &state)?;

    let result = find_similar(state.catalog.as_ref(), &id, limit)?;

    Ok(Json(result))
}

/// Requested limit, the configured default when absent, capped at the maximum
fn parse_limit(limit: Option<&str>, state: &AppState) -> Result<usize, AppError> {
    let Some(raw) = limit.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(state.config.default_limit);
    };

    match raw.parse::<usize>() {
        Ok(0) | Err(_) => Err(AppError::BadRequest(format!("Invalid limit: {}", raw))),
        Ok(limit) => Ok(limit.min(state.config.max_limit)),
    }
}
