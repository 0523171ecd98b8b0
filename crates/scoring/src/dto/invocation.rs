use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{PullRecord, RewardEntry};

/// Request payload for drawing from a reward pool
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct InvocationRequest {
    pub user_id: Uuid,
    #[serde(default = "default_count")]
    #[validate(range(min = 1, max = 100, message = "count must be between 1 and 100"))]
    pub count: u32,
}

fn default_count() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InvocationResponse {
    pub source: String,
    pub pulls: Vec<PullRecord>,
}

/// Request payload for replacing the entries of a reward pool
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RewardPoolRequest {
    #[validate(length(min = 1, max = 500, message = "A pool needs between 1 and 500 entries"))]
    pub entries: Vec<RewardEntry>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RewardPoolResponse {
    pub source: String,
    pub entries: Vec<RewardEntry>,
    pub total_weight: f64,
}
