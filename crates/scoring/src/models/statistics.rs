use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::activity::{ActivityKind, MatchOutcome};
use super::performance::PerformanceRecord;

/// Cumulative counters for one activity kind. Every field is zero until something is logged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ActivityTotals {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub best_rating: u32,
    pub sessions: u32,
    pub points: Decimal,
}

/// Aggregated statistics for a single user.
///
/// Transient: always rebuilt from the underlying records and never stored.
/// Kinds without an entry in `totals` read as all-zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UserStatisticsSnapshot {
    pub user_id: Uuid,
    pub totals: BTreeMap<ActivityKind, ActivityTotals>,
}

impl UserStatisticsSnapshot {
    pub fn empty(user_id: Uuid) -> Self {
        Self {
            user_id,
            totals: BTreeMap::new(),
        }
    }

    pub fn aggregate<'a>(
        user_id: Uuid,
        records: impl IntoIterator<Item = &'a PerformanceRecord>,
    ) -> Self {
        let mut snapshot = Self::empty(user_id);

        for record in records {
            let totals = snapshot.totals.entry(record.kind).or_default();
            totals.sessions = totals.sessions.saturating_add(1);
            totals.points = totals.points.saturating_add(record.points);

            match record.outcome {
                Some(MatchOutcome::Win) => totals.wins = totals.wins.saturating_add(1),
                Some(MatchOutcome::Loss) => totals.losses = totals.losses.saturating_add(1),
                Some(MatchOutcome::Draw) => totals.draws = totals.draws.saturating_add(1),
                None => {}
            }

            if let Some(rating) = record.rating {
                totals.best_rating = totals.best_rating.max(rating);
            }
        }

        snapshot
    }

    pub fn totals_for(&self, kind: ActivityKind) -> ActivityTotals {
        self.totals.get(&kind).cloned().unwrap_or_default()
    }

    pub fn total_wins(&self) -> u32 {
        self.count(|t| t.wins)
    }

    pub fn total_losses(&self) -> u32 {
        self.count(|t| t.losses)
    }

    pub fn total_sessions(&self) -> u32 {
        self.count(|t| t.sessions)
    }

    pub fn best_rating(&self) -> u32 {
        self.totals.values().map(|t| t.best_rating).max().unwrap_or(0)
    }

    pub fn esport_points(&self) -> Decimal {
        self.points_where(|kind| kind.is_esport())
    }

    pub fn sport_points(&self) -> Decimal {
        self.points_where(|kind| !kind.is_esport())
    }

    fn count(&self, field: impl Fn(&ActivityTotals) -> u32) -> u32 {
        self.totals
            .values()
            .fold(0, |sum, totals| sum.saturating_add(field(totals)))
    }

    fn points_where(&self, filter: impl Fn(ActivityKind) -> bool) -> Decimal {
        self.totals
            .iter()
            .filter(|(kind, _)| filter(**kind))
            .fold(Decimal::ZERO, |sum, (_, totals)| sum.saturating_add(totals.points))
    }
}
