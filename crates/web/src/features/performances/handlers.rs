use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scoring::dto::performance::{
    LogPerformanceRequest, PerformanceResponse, PreviewPointsRequest, PreviewPointsResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/performances",
    request_body = LogPerformanceRequest,
    responses(
        (status = 201, description = "Performance logged", body = PerformanceResponse),
        (status = 400, description = "Invalid metrics")
    ),
    tag = "performances"
)]
pub async fn log_performance(
    State(state): State<AppState>,
    Json(payload): Json<LogPerformanceRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let record = services::log_performance(state.store.as_ref(), payload).await?;

    Ok((StatusCode::CREATED, Json(record)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/performances/preview",
    request_body = PreviewPointsRequest,
    responses(
        (status = 200, description = "Points computed", body = PreviewPointsResponse),
        (status = 400, description = "Invalid metrics")
    ),
    tag = "performances"
)]
pub async fn preview_points(
    Json(payload): Json<PreviewPointsRequest>,
) -> Result<Response, WebError> {
    let preview = services::preview_points(&payload)?;

    Ok(Json(preview).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/performances/{record_id}",
    params(
        ("record_id" = Uuid, Path, description = "Performance record id")
    ),
    responses(
        (status = 204, description = "Performance deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Performance not found")
    ),
    security(("bearer_auth" = [])),
    tag = "performances"
)]
pub async fn delete_performance(
    State(state): State<AppState>,
    Path(record_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_performance(state.store.as_ref(), record_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
