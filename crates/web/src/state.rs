use std::sync::Arc;

use scoring::{DataStore, models::AchievementDefinition, services::achievements};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DataStore>,
    pub achievements: Arc<[AchievementDefinition]>,
    /// Held for the whole read-rank-write cycle of a leaderboard refresh.
    pub leaderboard_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self {
            store,
            achievements: achievements::catalogue().into(),
            leaderboard_lock: Arc::new(Mutex::new(())),
        }
    }
}
