use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use super::handlers::{get_pool, invoke, put_pool};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn pool_routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/:source", put(put_pool))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new().route("/:source", get(get_pool)).merge(protected)
}

pub fn invocation_routes() -> Router<AppState> {
    Router::new().route("/:source", post(invoke))
}
