//! Glue between the pure engine and a [`DataStore`].

use rand::Rng;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use super::{achievements, formulas, leaderboard, selector};
use crate::error::Result;
use crate::models::{
    AchievementDefinition, ActivityMetrics, MatchOutcome, PerformanceRecord, PullRecord,
};
use crate::store::DataStore;

pub fn preview_points(metrics: &ActivityMetrics) -> Result<Decimal> {
    formulas::score(metrics)
}

/// Scores the activity and hands the record to the store.
pub async fn log_performance<S: DataStore + ?Sized>(
    store: &S,
    user_id: Uuid,
    metrics: ActivityMetrics,
    outcome: Option<MatchOutcome>,
    rating: Option<u32>,
) -> Result<PerformanceRecord> {
    let record = PerformanceRecord::score(user_id, metrics, outcome, rating)?;
    store.insert_performance(record.clone()).await?;

    info!(
        user_id = %user_id,
        kind = record.kind.as_str(),
        points = %record.points,
        "Logged performance"
    );

    Ok(record)
}

pub async fn user_achievements<S: DataStore + ?Sized>(
    store: &S,
    definitions: &[AchievementDefinition],
    user_id: Uuid,
) -> Result<achievements::AchievementReport> {
    let snapshot = store.user_statistics(user_id).await?;
    Ok(achievements::evaluate(definitions, &snapshot))
}

/// Performs `count` independent pulls from the pool registered for `source`.
pub async fn invoke<S, R>(
    store: &S,
    user_id: Uuid,
    source: &str,
    count: usize,
    rng: &mut R,
) -> Result<Vec<PullRecord>>
where
    S: DataStore + ?Sized,
    R: Rng + ?Sized,
{
    let pool = store.reward_pool(source).await?;

    let pulls: Vec<PullRecord> = selector::pull(&pool, count, rng)
        .into_iter()
        .map(|entry| PullRecord::new(user_id, source, entry))
        .collect();

    store.record_pulls(pulls.clone()).await?;
    info!(user_id = %user_id, source, count = pulls.len(), "Resolved invocation");

    Ok(pulls)
}

/// Ranks current standings against the scope's previous snapshot and saves the new one.
///
/// Reads the previous snapshot once and writes once. Concurrent refreshes of the
/// same scope must be serialized by the caller.
pub async fn refresh_leaderboard<S: DataStore + ?Sized>(
    store: &S,
    scope: &str,
) -> Result<leaderboard::RankedLeaderboard> {
    let previous = store.previous_ranking(scope).await?;
    let standings = store.standings().await?;

    let ranked = leaderboard::rank(standings, &previous);
    store.save_ranking(scope, ranked.snapshot.clone()).await?;

    info!(scope, entries = ranked.entries.len(), "Refreshed leaderboard");

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{ProfileStyle, RankMovement, RewardEntry, RewardPool, UserProfile};
    use crate::store::MemoryStore;
    use rand::{SeedableRng, rngs::StdRng};

    fn combat(kills: u32) -> ActivityMetrics {
        ActivityMetrics::Combat {
            kills,
            deaths: 0,
            assists: 0,
        }
    }

    #[tokio::test]
    async fn test_log_performance_persists_points() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();

        let record = log_performance(&store, user_id, combat(7), None, None)
            .await
            .unwrap();

        let stored = store.performances_for(user_id).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].record_id, record.record_id);
        assert_eq!(stored[0].points, Decimal::from(7));
    }

    #[tokio::test]
    async fn test_invalid_performance_is_not_stored() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();

        let result = log_performance(
            &store,
            user_id,
            ActivityMetrics::Strength {
                reps: 0,
                sets: 3,
                weight_kg: Decimal::ZERO,
            },
            None,
            None,
        )
        .await;

        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
        assert!(store.performances_for(user_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_user_achievements_from_store() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();
        log_performance(&store, user_id, combat(1), Some(MatchOutcome::Win), None)
            .await
            .unwrap();

        let definitions = achievements::catalogue();
        let report = user_achievements(&store, &definitions, user_id)
            .await
            .unwrap();

        assert_eq!(report.unlocked, vec!["first_steps", "first_blood"]);
        assert_eq!(report.total_points, 30);
    }

    #[tokio::test]
    async fn test_invoke_records_history() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();
        let pool = RewardPool::new(
            "weekly",
            vec![
                RewardEntry {
                    id: 1,
                    label: Some("Common".to_string()),
                    weight: 0.0,
                },
                RewardEntry {
                    id: 2,
                    label: Some("Rare".to_string()),
                    weight: 0.0,
                },
            ],
        )
        .unwrap();
        store.put_reward_pool(pool).await.unwrap();

        let mut rng = StdRng::seed_from_u64(9);
        let pulls = invoke(&store, user_id, "weekly", 3, &mut rng).await.unwrap();

        assert_eq!(pulls.len(), 3);
        assert!(pulls.iter().all(|p| p.reward_id == 2));
        assert_eq!(store.pull_history(user_id).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_invoke_unknown_source() {
        let store = MemoryStore::new();
        let mut rng = StdRng::seed_from_u64(9);

        let result = invoke(&store, Uuid::new_v4(), "missing", 1, &mut rng).await;
        assert!(matches!(result, Err(EngineError::NotFound)));
    }

    #[tokio::test]
    async fn test_refresh_leaderboard_tracks_movement() {
        let store = MemoryStore::new();
        let leader = Uuid::new_v4();
        let chaser = Uuid::new_v4();

        log_performance(&store, leader, combat(20), None, None)
            .await
            .unwrap();
        log_performance(&store, chaser, combat(10), None, None)
            .await
            .unwrap();

        let first = refresh_leaderboard(&store, "global").await.unwrap();
        assert!(first.entries.iter().all(|e| e.movement.is_none()));
        assert_eq!(first.entries[0].subject_id, leader);

        store
            .upsert_profile(UserProfile {
                user_id: chaser,
                display_name: "chaser".to_string(),
                profile_style: ProfileStyle::Player,
            })
            .await
            .unwrap();
        log_performance(&store, chaser, combat(8), None, None)
            .await
            .unwrap();

        // Player style on 18 eSport points: round(22.5) = 23, ahead of 20.
        let second = refresh_leaderboard(&store, "global").await.unwrap();
        assert_eq!(second.entries[0].subject_id, chaser);
        assert_eq!(second.entries[0].movement, Some(RankMovement::Up));
        assert_eq!(second.entries[1].movement, Some(RankMovement::Down));

        let third = refresh_leaderboard(&store, "global").await.unwrap();
        assert!(third.entries.iter().all(|e| e.movement.is_none()));

        // Scopes are tracked independently.
        let other = refresh_leaderboard(&store, "viewer-2").await.unwrap();
        assert!(other.entries.iter().all(|e| e.movement.is_none()));
    }

    #[tokio::test]
    async fn test_refresh_refuses_scopes_past_store_limit() {
        let store = MemoryStore::with_scope_limit(1);
        log_performance(&store, Uuid::new_v4(), combat(3), None, None)
            .await
            .unwrap();

        refresh_leaderboard(&store, "global").await.unwrap();
        let result = refresh_leaderboard(&store, "other").await;

        assert!(matches!(result, Err(EngineError::ConstraintViolation(_))));
        refresh_leaderboard(&store, "global").await.unwrap();
    }
}
