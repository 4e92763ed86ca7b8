use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Json,
};
use memora_core::value_history::{ValueHistory, value_history};

use crate::error::AppError;
use crate::handlers::required_id;
use crate::models::{ErrorResponse, IdQuery};
use crate::server::AppState;

/// Value history
///
/// Returns a synthetic daily price series for the last 60 days, ending today.
#[utoipa::path(
    get,
    path = "/value-history",
    params(IdQuery),
    responses(
        (status = 200, description = "Daily price series", body = ValueHistory),
        (status = 400, description = "Missing memory id", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_value_history(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<ValueHistory>, AppError> {
    let Query(query) = query?;
    let id = required_id(query.id, "Memory ID is required")?;

    let today = chrono::Utc::now().date_naive();
    let history = value_history(&id, today, &state.config)?;

    Ok(Json(history))
}
