use serde::Serialize;
use utoipa::ToSchema;

use crate::models::LeaderboardEntry;

#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardRow {
    /// One-based position.
    pub rank: usize,
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
}

impl From<LeaderboardEntry> for LeaderboardRow {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            rank: entry.display_rank(),
            entry,
        }
    }
}
