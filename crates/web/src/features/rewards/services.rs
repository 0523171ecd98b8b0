use rand::{SeedableRng, rngs::StdRng};
use scoring::{
    DataStore,
    dto::invocation::{InvocationResponse, RewardPoolResponse},
    error::Result,
    models::{RewardEntry, RewardPool},
    services::{selector, tracker},
};
use uuid::Uuid;

fn pool_to_response(pool: &RewardPool) -> RewardPoolResponse {
    RewardPoolResponse {
        source: pool.source().to_string(),
        entries: pool.entries().to_vec(),
        total_weight: selector::total_weight(pool.entries()),
    }
}

pub async fn get_pool(store: &dyn DataStore, source: &str) -> Result<RewardPoolResponse> {
    let pool = store.reward_pool(source).await?;
    Ok(pool_to_response(&pool))
}

/// Replace the pool for a source, validating its weights
pub async fn put_pool(
    store: &dyn DataStore,
    source: &str,
    entries: Vec<RewardEntry>,
) -> Result<RewardPoolResponse> {
    let pool = RewardPool::new(source, entries)?;
    let response = pool_to_response(&pool);

    store.put_reward_pool(pool).await?;
    tracing::info!(source, entries = response.entries.len(), "Reward pool updated");

    Ok(response)
}

/// Draw `count` rewards for the user
pub async fn invoke(
    store: &dyn DataStore,
    user_id: Uuid,
    source: &str,
    count: u32,
) -> Result<InvocationResponse> {
    let mut rng = StdRng::from_os_rng();
    let pulls = tracker::invoke(store, user_id, source, count as usize, &mut rng).await?;

    Ok(InvocationResponse {
        source: source.to_string(),
        pulls,
    })
}
