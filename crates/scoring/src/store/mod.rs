//! Access to the backing data store.
//!
//! The engine never owns persistence; it reads resolved inputs through this
//! trait and writes results back. [`MemoryStore`] is the in-process
//! implementation used by the HTTP service and tests.

mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{
    PerformanceRecord, PullRecord, RankSnapshot, RewardPool, Standing, UserProfile,
    UserStatisticsSnapshot,
};

pub use memory::{DEFAULT_SCOPE_LIMIT, MemoryStore};

#[async_trait]
pub trait DataStore: Send + Sync {
    /// Stores a scored record verbatim. Points are never re-read for validation.
    async fn insert_performance(&self, record: PerformanceRecord) -> Result<()>;

    /// Administrative removal. Records are otherwise never modified.
    async fn delete_performance(&self, record_id: Uuid) -> Result<()>;

    async fn performances_for(&self, user_id: Uuid) -> Result<Vec<PerformanceRecord>>;

    /// Aggregated statistics, recomputed on every call.
    async fn user_statistics(&self, user_id: Uuid) -> Result<UserStatisticsSnapshot>;

    async fn profile(&self, user_id: Uuid) -> Result<UserProfile>;

    async fn upsert_profile(&self, profile: UserProfile) -> Result<()>;

    /// Current eSport/Sport totals for every known user, in registration order.
    async fn standings(&self) -> Result<Vec<Standing>>;

    async fn reward_pool(&self, source: &str) -> Result<RewardPool>;

    async fn put_reward_pool(&self, pool: RewardPool) -> Result<()>;

    async fn record_pulls(&self, pulls: Vec<PullRecord>) -> Result<()>;

    async fn pull_history(&self, user_id: Uuid) -> Result<Vec<PullRecord>>;

    /// Last saved ranking for `scope`, empty if none was saved yet.
    async fn previous_ranking(&self, scope: &str) -> Result<RankSnapshot>;

    async fn save_ranking(&self, scope: &str, snapshot: RankSnapshot) -> Result<()>;
}
