use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::AchievementDefinition;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AchievementView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub reward: u32,
    pub unlocked: bool,
}

/// Every achievement with its unlock state for one user
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AchievementReportResponse {
    pub user_id: Uuid,
    pub achievements: Vec<AchievementView>,
    pub unlocked_count: usize,
    pub total_points: u64,
}

impl AchievementReportResponse {
    pub fn new(
        user_id: Uuid,
        definitions: &[AchievementDefinition],
        unlocked: &[&str],
        total_points: u64,
    ) -> Self {
        let achievements = definitions
            .iter()
            .map(|d| AchievementView {
                id: d.id.to_string(),
                title: d.title.to_string(),
                description: d.description.to_string(),
                reward: d.reward,
                unlocked: unlocked.contains(&d.id),
            })
            .collect();

        Self {
            user_id,
            achievements,
            unlocked_count: unlocked.len(),
            total_points,
        }
    }
}
