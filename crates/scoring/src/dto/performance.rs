use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{ActivityKind, ActivityMetrics, MatchOutcome, PerformanceRecord};

/// Request payload for logging a new activity
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LogPerformanceRequest {
    pub user_id: Uuid,
    pub metrics: ActivityMetrics,
    pub outcome: Option<MatchOutcome>,
    #[validate(range(max = 5000, message = "Rating must be at most 5000"))]
    pub rating: Option<u32>,
}

/// Request payload for scoring an activity without saving it
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PreviewPointsRequest {
    pub metrics: ActivityMetrics,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PreviewPointsResponse {
    pub kind: ActivityKind,
    pub points: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PerformanceResponse {
    pub record_id: Uuid,
    pub user_id: Uuid,
    pub kind: ActivityKind,
    pub metrics: ActivityMetrics,
    pub outcome: Option<MatchOutcome>,
    pub rating: Option<u32>,
    pub points: Decimal,
    pub recorded_at: NaiveDateTime,
}

impl From<PerformanceRecord> for PerformanceResponse {
    fn from(record: PerformanceRecord) -> Self {
        Self {
            record_id: record.record_id,
            user_id: record.user_id,
            kind: record.kind,
            metrics: record.metrics,
            outcome: record.outcome,
            rating: record.rating,
            points: record.points,
            recorded_at: record.recorded_at,
        }
    }
}
