use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::activity::{ActivityKind, ActivityMetrics, MatchOutcome};
use crate::error::Result;
use crate::services::formulas;

/// One logged activity instance.
///
/// Records are immutable: the point value is computed once at creation and
/// never recomputed afterwards, even if the formulas change.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PerformanceRecord {
    pub record_id: Uuid,
    pub user_id: Uuid,
    pub kind: ActivityKind,
    pub metrics: ActivityMetrics,
    pub outcome: Option<MatchOutcome>,
    pub rating: Option<u32>,
    pub points: Decimal,
    pub recorded_at: NaiveDateTime,
}

impl PerformanceRecord {
    /// Validates and scores the metrics, producing a new record stamped with the current time.
    pub fn score(
        user_id: Uuid,
        metrics: ActivityMetrics,
        outcome: Option<MatchOutcome>,
        rating: Option<u32>,
    ) -> Result<Self> {
        let points = formulas::score(&metrics)?;

        Ok(Self {
            record_id: Uuid::new_v4(),
            user_id,
            kind: metrics.kind(),
            metrics,
            outcome,
            rating,
            points,
            recorded_at: chrono::Utc::now().naive_utc(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_score_builds_record_with_points() {
        let user_id = Uuid::new_v4();
        let record = PerformanceRecord::score(
            user_id,
            ActivityMetrics::Combat {
                kills: 10,
                deaths: 4,
                assists: 3,
            },
            Some(MatchOutcome::Win),
            None,
        )
        .unwrap();

        assert_eq!(record.user_id, user_id);
        assert_eq!(record.kind, ActivityKind::CombatGame);
        assert_eq!(record.points, Decimal::new(995, 2));
    }

    #[test]
    fn test_score_rejects_invalid_metrics() {
        let result = PerformanceRecord::score(
            Uuid::new_v4(),
            ActivityMetrics::Cycling {
                distance_km: Decimal::ZERO,
                duration_seconds: 600,
            },
            None,
            None,
        );

        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }
}
