use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use scoring::dto::invocation::{
    InvocationRequest, InvocationResponse, RewardPoolRequest, RewardPoolResponse,
};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/reward-pools/{source}",
    params(
        ("source" = String, Path, description = "Reward source")
    ),
    responses(
        (status = 200, description = "Reward pool found", body = RewardPoolResponse),
        (status = 404, description = "No pool for this source")
    ),
    tag = "rewards"
)]
pub async fn get_pool(
    State(state): State<AppState>,
    Path(source): Path<String>,
) -> Result<Response, WebError> {
    let pool = services::get_pool(state.store.as_ref(), &source).await?;

    Ok(Json(pool).into_response())
}

#[utoipa::path(
    put,
    path = "/api/reward-pools/{source}",
    params(
        ("source" = String, Path, description = "Reward source")
    ),
    request_body = RewardPoolRequest,
    responses(
        (status = 200, description = "Reward pool replaced", body = RewardPoolResponse),
        (status = 400, description = "Invalid weights"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "rewards"
)]
pub async fn put_pool(
    State(state): State<AppState>,
    Path(source): Path<String>,
    Json(payload): Json<RewardPoolRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let pool = services::put_pool(state.store.as_ref(), &source, payload.entries).await?;

    Ok(Json(pool).into_response())
}

#[utoipa::path(
    post,
    path = "/api/invocations/{source}",
    params(
        ("source" = String, Path, description = "Reward source to draw from")
    ),
    request_body = InvocationRequest,
    responses(
        (status = 200, description = "Rewards drawn", body = InvocationResponse),
        (status = 400, description = "Invalid pull count"),
        (status = 404, description = "No pool for this source")
    ),
    tag = "rewards"
)]
pub async fn invoke(
    State(state): State<AppState>,
    Path(source): Path<String>,
    Json(payload): Json<InvocationRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let response =
        services::invoke(state.store.as_ref(), payload.user_id, &source, payload.count).await?;

    Ok(Json(response).into_response())
}
