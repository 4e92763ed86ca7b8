use crate::handlers::{
    get_similar_memories, get_validator_performance, get_value_history, method_not_allowed,
};
use crate::server::AppState;
use axum::{Router, routing::get};

/// Create the analytics routes with state. Only GET is served; every other
/// method gets a JSON 405. HEAD is routed explicitly since `get` would
/// otherwise answer it.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/similar-memories",
            get(get_similar_memories)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/validator-performance",
            get(get_validator_performance)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/value-history",
            get(get_value_history)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
}
