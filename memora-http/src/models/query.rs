use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters of the similar memories endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SimilarMemoriesQuery {
    /// Identifier of the source memory
    pub id: Option<String>,

    /// Maximum number of results, 5 unless configured otherwise
    #[param(value_type = Option<u32>)]
    pub limit: Option<String>,
}

/// Query parameters of the endpoints keyed by a single identifier
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// Body of every error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
