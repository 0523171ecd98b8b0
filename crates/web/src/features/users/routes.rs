use axum::{
    Router,
    routing::{get, put},
};

use super::handlers::{
    get_achievements, get_statistics, list_performances, list_pulls, update_profile,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/:user_id/performances", get(list_performances))
        .route("/:user_id/stats", get(get_statistics))
        .route("/:user_id/achievements", get(get_achievements))
        .route("/:user_id/profile", put(update_profile))
        .route("/:user_id/invocations", get(list_pulls))
}
