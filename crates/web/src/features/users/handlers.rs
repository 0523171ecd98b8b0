use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use scoring::{
    dto::{
        achievement::AchievementReportResponse, performance::PerformanceResponse,
        profile::UpdateProfileRequest,
    },
    models::{PullRecord, UserProfile, UserStatisticsSnapshot},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/performances",
    params(
        ("user_id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Performances logged by the user", body = Vec<PerformanceResponse>)
    ),
    tag = "users"
)]
pub async fn list_performances(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let records = services::list_performances(state.store.as_ref(), user_id).await?;

    Ok(Json(records).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/stats",
    params(
        ("user_id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Aggregated statistics", body = UserStatisticsSnapshot)
    ),
    tag = "users"
)]
pub async fn get_statistics(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let snapshot = services::get_statistics(state.store.as_ref(), user_id).await?;

    Ok(Json(snapshot).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/achievements",
    params(
        ("user_id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Achievements with unlock state", body = AchievementReportResponse)
    ),
    tag = "users"
)]
pub async fn get_achievements(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let report =
        services::get_achievements(state.store.as_ref(), &state.achievements, user_id).await?;

    Ok(Json(report).into_response())
}

#[utoipa::path(
    put,
    path = "/api/users/{user_id}/profile",
    params(
        ("user_id" = Uuid, Path, description = "User id")
    ),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = UserProfile),
        (status = 400, description = "Invalid input")
    ),
    tag = "users"
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let profile = services::update_profile(state.store.as_ref(), user_id, payload).await?;

    Ok(Json(profile).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/invocations",
    params(
        ("user_id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Reward pulls made by the user", body = Vec<PullRecord>)
    ),
    tag = "users"
)]
pub async fn list_pulls(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let pulls = services::list_pulls(state.store.as_ref(), user_id).await?;

    Ok(Json(pulls).into_response())
}
