use scoring::{
    DataStore, EngineError,
    dto::{
        achievement::AchievementReportResponse, performance::PerformanceResponse,
        profile::UpdateProfileRequest,
    },
    error::Result,
    models::{AchievementDefinition, PullRecord, UserProfile, UserStatisticsSnapshot},
    services::tracker,
};
use uuid::Uuid;

pub async fn list_performances(
    store: &dyn DataStore,
    user_id: Uuid,
) -> Result<Vec<PerformanceResponse>> {
    let records = store.performances_for(user_id).await?;
    Ok(records.into_iter().map(PerformanceResponse::from).collect())
}

pub async fn get_statistics(
    store: &dyn DataStore,
    user_id: Uuid,
) -> Result<UserStatisticsSnapshot> {
    store.user_statistics(user_id).await
}

/// Evaluate every achievement against the user's current statistics
pub async fn get_achievements(
    store: &dyn DataStore,
    definitions: &[AchievementDefinition],
    user_id: Uuid,
) -> Result<AchievementReportResponse> {
    let report = tracker::user_achievements(store, definitions, user_id).await?;

    Ok(AchievementReportResponse::new(
        user_id,
        definitions,
        &report.unlocked,
        report.total_points,
    ))
}

/// Create or update a profile, keeping the current display name when none is given
pub async fn update_profile(
    store: &dyn DataStore,
    user_id: Uuid,
    request: UpdateProfileRequest,
) -> Result<UserProfile> {
    let mut profile = match store.profile(user_id).await {
        Ok(profile) => profile,
        Err(EngineError::NotFound) => UserProfile::new(user_id),
        Err(e) => return Err(e),
    };

    if let Some(display_name) = request.display_name {
        profile.display_name = display_name;
    }
    profile.profile_style = request.profile_style;

    store.upsert_profile(profile.clone()).await?;
    Ok(profile)
}

pub async fn list_pulls(store: &dyn DataStore, user_id: Uuid) -> Result<Vec<PullRecord>> {
    store.pull_history(user_id).await
}
