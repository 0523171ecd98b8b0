use axum::{
    Router, middleware,
    routing::{delete, post},
};

use super::handlers::{delete_performance, log_performance, preview_points};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/:record_id", delete(delete_performance))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", post(log_performance))
        .route("/preview", post(preview_points))
        .merge(protected)
}
