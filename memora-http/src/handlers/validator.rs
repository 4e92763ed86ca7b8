use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Json,
};
use memora_core::validator::{ValidatorStats, validator_stats};

use crate::error::AppError;
use crate::handlers::required_id;
use crate::models::{ErrorResponse, IdQuery};
use crate::server::AppState;

/// Validator performance
///
/// Returns a synthetic performance profile derived from the validator id.
/// In hybrid generation mode repeated calls return different figures.
#[utoipa::path(
    get,
    path = "/validator-performance",
    params(IdQuery),
    responses(
        (status = 200, description = "Validator performance profile", body = ValidatorStats),
        (status = 400, description = "Missing validator id", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_validator_performance(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<ValidatorStats>, AppError> {
    let Query(query) = query?;
    let id = required_id(query.id, "Validator ID is required")?;

    let today = chrono::Utc::now().date_naive();
    let stats = validator_stats(&id, today, &state.config)?;

    Ok(Json(stats))
}
