use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{EngineError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RewardEntry {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub weight: f64,
}

/// Weighted set of rewards that can be drawn for a given source.
///
/// Construction guarantees the pool is non-empty and that every weight is
/// finite and non-negative. A pool whose weights are all zero is valid and
/// always resolves to its last entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "RawRewardPool")]
pub struct RewardPool {
    source: String,
    entries: Vec<RewardEntry>,
}

#[derive(Deserialize)]
struct RawRewardPool {
    source: String,
    entries: Vec<RewardEntry>,
}

impl TryFrom<RawRewardPool> for RewardPool {
    type Error = EngineError;

    fn try_from(raw: RawRewardPool) -> Result<Self> {
        Self::new(raw.source, raw.entries)
    }
}

impl RewardPool {
    pub fn new(source: impl Into<String>, entries: Vec<RewardEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(EngineError::EmptyPool);
        }

        if let Some(bad) = entries
            .iter()
            .find(|e| !e.weight.is_finite() || e.weight < 0.0)
        {
            return Err(EngineError::InvalidWeight {
                id: bad.id,
                weight: bad.weight,
            });
        }

        if !entries.iter().map(|e| e.weight).sum::<f64>().is_finite() {
            return Err(EngineError::TotalWeightOverflow);
        }

        Ok(Self {
            source: source.into(),
            entries,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn entries(&self) -> &[RewardEntry] {
        &self.entries
    }
}

/// A single resolved pull, kept as history by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PullRecord {
    pub user_id: Uuid,
    pub source: String,
    pub reward_id: i64,
    pub label: Option<String>,
    pub pulled_at: NaiveDateTime,
}

impl PullRecord {
    pub fn new(user_id: Uuid, source: &str, entry: &RewardEntry) -> Self {
        Self {
            user_id,
            source: source.to_string(),
            reward_id: entry.id,
            label: entry.label.clone(),
            pulled_at: chrono::Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, weight: f64) -> RewardEntry {
        RewardEntry {
            id,
            label: None,
            weight,
        }
    }

    #[test]
    fn test_rejects_empty_pool() {
        assert!(matches!(
            RewardPool::new("daily", vec![]),
            Err(EngineError::EmptyPool)
        ));
    }

    #[test]
    fn test_rejects_negative_and_nan_weights() {
        assert!(matches!(
            RewardPool::new("daily", vec![entry(1, 10.0), entry(2, -1.0)]),
            Err(EngineError::InvalidWeight { id: 2, .. })
        ));
        assert!(RewardPool::new("daily", vec![entry(1, f64::NAN)]).is_err());
    }

    #[test]
    fn test_rejects_weights_whose_sum_overflows() {
        assert!(matches!(
            RewardPool::new("daily", vec![entry(1, f64::MAX), entry(2, f64::MAX)]),
            Err(EngineError::TotalWeightOverflow)
        ));

        let pool = RewardPool::new("daily", vec![entry(1, f64::MAX), entry(2, 0.0)]).unwrap();
        assert_eq!(pool.entries().len(), 2);
    }

    #[test]
    fn test_accepts_all_zero_weights() {
        let pool = RewardPool::new("daily", vec![entry(1, 0.0), entry(2, 0.0)]).unwrap();
        assert_eq!(pool.entries().len(), 2);
        assert_eq!(pool.source(), "daily");
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"source":"daily","entries":[]}"#;
        assert!(serde_json::from_str::<RewardPool>(json).is_err());

        let json = r#"{"source":"daily","entries":[{"id":1,"weight":50},{"id":2,"label":"Rare skin","weight":5}]}"#;
        let pool: RewardPool = serde_json::from_str(json).unwrap();
        assert_eq!(pool.entries()[1].label.as_deref(), Some("Rare skin"));
    }
}
