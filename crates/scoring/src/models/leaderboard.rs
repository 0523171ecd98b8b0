use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStyle {
    /// Favours the eSport score.
    Player,
    /// Favours the Sport score.
    Athlete,
    #[default]
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RankMovement {
    Up,
    Down,
}

impl RankMovement {
    pub fn arrow(movement: Option<Self>) -> &'static str {
        match movement {
            Some(Self::Up) => "▲",
            Some(Self::Down) => "▼",
            None => "-",
        }
    }
}

/// Unranked leaderboard input for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Standing {
    pub subject_id: Uuid,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub esport_score: Decimal,
    #[serde(default)]
    pub sport_score: Decimal,
    #[serde(default)]
    pub profile_style: ProfileStyle,
}

impl Standing {
    pub fn total_score(&self) -> Decimal {
        self.esport_score.saturating_add(self.sport_score)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    pub subject_id: Uuid,
    pub display_name: String,
    pub esport_score: Decimal,
    pub sport_score: Decimal,
    pub total_score: Decimal,
    pub profile_style: ProfileStyle,
    /// Present only for `player` and `athlete` styles.
    pub modified_total: Option<Decimal>,
    pub previous_rank: Option<usize>,
    /// Zero-based.
    pub current_rank: usize,
    pub movement: Option<RankMovement>,
}

impl LeaderboardEntry {
    /// The score the entry is ordered by.
    pub fn ranking_score(&self) -> Decimal {
        self.modified_total.unwrap_or(self.total_score)
    }

    pub fn display_rank(&self) -> usize {
        self.current_rank + 1
    }
}

/// Rank index per subject from a previous evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct RankSnapshot(BTreeMap<Uuid, usize>);

impl RankSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rank_of(&self, subject_id: &Uuid) -> Option<usize> {
        self.0.get(subject_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Uuid, usize)> for RankSnapshot {
    fn from_iter<I: IntoIterator<Item = (Uuid, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
