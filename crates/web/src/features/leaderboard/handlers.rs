use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use scoring::dto::{
    common::{PaginatedResponse, PaginationParams},
    leaderboard::LeaderboardRow,
};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard/{scope}",
    params(
        ("scope" = String, Path, description = "Whose previous ranking movement is measured against"),
        PaginationParams
    ),
    responses(
        (status = 200, description = "Ranked leaderboard with movement", body = PaginatedResponse<LeaderboardRow>),
        (status = 400, description = "Invalid scope or query parameters"),
        (status = 409, description = "Too many leaderboard scopes")
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Path(scope): Path<String>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, WebError> {
    services::validate_scope(&scope).map_err(WebError::BadRequest)?;
    pagination.validate().map_err(WebError::BadRequest)?;

    let (rows, total_items) = services::get_leaderboard(&state, &scope, &pagination).await?;

    let response = PaginatedResponse::new(
        rows,
        pagination.page,
        pagination.page_size,
        total_items,
    );

    Ok(Json(response).into_response())
}
