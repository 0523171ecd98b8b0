use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::DataStore;
use crate::error::{EngineError, Result};
use crate::models::{
    PerformanceRecord, PullRecord, RankSnapshot, RewardPool, Standing, UserProfile,
    UserStatisticsSnapshot,
};

#[derive(Default)]
struct Tables {
    records: Vec<PerformanceRecord>,
    profiles: HashMap<Uuid, UserProfile>,
    /// User ids in the order they were first seen.
    registration: Vec<Uuid>,
    pools: HashMap<String, RewardPool>,
    pulls: Vec<PullRecord>,
    rankings: HashMap<String, RankSnapshot>,
}

impl Tables {
    fn register(&mut self, user_id: Uuid) {
        if !self.profiles.contains_key(&user_id) {
            self.profiles.insert(user_id, UserProfile::new(user_id));
            self.registration.push(user_id);
        }
    }
}

/// Distinct leaderboard scopes kept before new ones are refused.
pub const DEFAULT_SCOPE_LIMIT: usize = 256;

pub struct MemoryStore {
    tables: RwLock<Tables>,
    scope_limit: usize,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::with_scope_limit(DEFAULT_SCOPE_LIMIT)
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scope_limit(scope_limit: usize) -> Self {
        Self {
            tables: RwLock::default(),
            scope_limit,
        }
    }
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn insert_performance(&self, record: PerformanceRecord) -> Result<()> {
        let mut tables = self.tables.write().await;

        if tables.records.iter().any(|r| r.record_id == record.record_id) {
            return Err(EngineError::ConstraintViolation(format!(
                "record {} already exists",
                record.record_id
            )));
        }

        tables.register(record.user_id);
        tables.records.push(record);
        Ok(())
    }

    async fn delete_performance(&self, record_id: Uuid) -> Result<()> {
        let mut tables = self.tables.write().await;
        let before = tables.records.len();
        tables.records.retain(|r| r.record_id != record_id);

        if tables.records.len() == before {
            return Err(EngineError::NotFound);
        }
        Ok(())
    }

    async fn performances_for(&self, user_id: Uuid) -> Result<Vec<PerformanceRecord>> {
        let tables = self.tables.read().await;
        Ok(tables
            .records
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn user_statistics(&self, user_id: Uuid) -> Result<UserStatisticsSnapshot> {
        let tables = self.tables.read().await;
        Ok(UserStatisticsSnapshot::aggregate(
            user_id,
            tables.records.iter().filter(|r| r.user_id == user_id),
        ))
    }

    async fn profile(&self, user_id: Uuid) -> Result<UserProfile> {
        let tables = self.tables.read().await;
        tables
            .profiles
            .get(&user_id)
            .cloned()
            .ok_or(EngineError::NotFound)
    }

    async fn upsert_profile(&self, profile: UserProfile) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables.register(profile.user_id);
        tables.profiles.insert(profile.user_id, profile);
        Ok(())
    }

    async fn standings(&self) -> Result<Vec<Standing>> {
        let tables = self.tables.read().await;

        let mut totals: HashMap<Uuid, (Decimal, Decimal)> = HashMap::new();
        for record in &tables.records {
            let (esport, sport) = totals.entry(record.user_id).or_default();
            let bucket = if record.kind.is_esport() { esport } else { sport };
            *bucket = bucket.saturating_add(record.points);
        }

        let standings = tables
            .registration
            .iter()
            .filter_map(|user_id| tables.profiles.get(user_id))
            .map(|profile| {
                let (esport_score, sport_score) =
                    totals.get(&profile.user_id).copied().unwrap_or_default();
                Standing {
                    subject_id: profile.user_id,
                    display_name: profile.display_name.clone(),
                    esport_score,
                    sport_score,
                    profile_style: profile.profile_style,
                }
            })
            .collect();

        Ok(standings)
    }

    async fn reward_pool(&self, source: &str) -> Result<RewardPool> {
        let tables = self.tables.read().await;
        tables.pools.get(source).cloned().ok_or(EngineError::NotFound)
    }

    async fn put_reward_pool(&self, pool: RewardPool) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables.pools.insert(pool.source().to_string(), pool);
        Ok(())
    }

    async fn record_pulls(&self, pulls: Vec<PullRecord>) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables.pulls.extend(pulls);
        Ok(())
    }

    async fn pull_history(&self, user_id: Uuid) -> Result<Vec<PullRecord>> {
        let tables = self.tables.read().await;
        Ok(tables
            .pulls
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn previous_ranking(&self, scope: &str) -> Result<RankSnapshot> {
        let tables = self.tables.read().await;
        Ok(tables.rankings.get(scope).cloned().unwrap_or_default())
    }

    async fn save_ranking(&self, scope: &str, snapshot: RankSnapshot) -> Result<()> {
        let mut tables = self.tables.write().await;

        if !tables.rankings.contains_key(scope) && tables.rankings.len() >= self.scope_limit {
            return Err(EngineError::ConstraintViolation(format!(
                "leaderboard scope limit of {} reached",
                self.scope_limit
            )));
        }

        tables.rankings.insert(scope.to_string(), snapshot);
        Ok(())
    }
}
