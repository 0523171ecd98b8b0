use std::cmp::Ordering;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::debug;

use crate::models::{LeaderboardEntry, ProfileStyle, RankMovement, RankSnapshot, Standing};

/// Weighted recombination of eSport and Sport scores, used for ranking only.
pub fn modified_total(style: ProfileStyle, esport: Decimal, sport: Decimal) -> Option<Decimal> {
    let (esport_weight, sport_weight) = match style {
        ProfileStyle::Player => (Decimal::new(125, 2), Decimal::new(5, 1)),
        ProfileStyle::Athlete => (Decimal::new(5, 1), Decimal::new(125, 2)),
        ProfileStyle::Balanced => return None,
    };

    Some(
        esport
            .saturating_mul(esport_weight)
            .saturating_add(sport.saturating_mul(sport_weight))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
    )
}

pub fn movement(previous: Option<usize>, current: usize) -> Option<RankMovement> {
    match previous?.cmp(&current) {
        Ordering::Greater => Some(RankMovement::Up),
        Ordering::Less => Some(RankMovement::Down),
        Ordering::Equal => None,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedLeaderboard {
    pub entries: Vec<LeaderboardEntry>,
    /// Ranks to hand back as `previous` on the next evaluation.
    pub snapshot: RankSnapshot,
}

/// Ranks standings and computes movement against the previous snapshot.
///
/// Entries are ordered by modified total (or total score when there is none),
/// highest first. Ties keep their input order.
pub fn rank(standings: Vec<Standing>, previous: &RankSnapshot) -> RankedLeaderboard {
    let mut entries: Vec<LeaderboardEntry> = standings
        .into_iter()
        .map(|standing| {
            let total_score = standing.total_score();
            LeaderboardEntry {
                modified_total: modified_total(
                    standing.profile_style,
                    standing.esport_score,
                    standing.sport_score,
                ),
                previous_rank: previous.rank_of(&standing.subject_id),
                subject_id: standing.subject_id,
                display_name: standing.display_name,
                esport_score: standing.esport_score,
                sport_score: standing.sport_score,
                total_score,
                profile_style: standing.profile_style,
                current_rank: 0,
                movement: None,
            }
        })
        .collect();

    // sort_by is stable
    entries.sort_by(|a, b| b.ranking_score().cmp(&a.ranking_score()));

    for (index, entry) in entries.iter_mut().enumerate() {
        entry.current_rank = index;
        entry.movement = movement(entry.previous_rank, index);
    }

    let snapshot: RankSnapshot = entries
        .iter()
        .map(|entry| (entry.subject_id, entry.current_rank))
        .collect();

    debug!(
        entries = entries.len(),
        previous = previous.len(),
        "Ranked leaderboard"
    );

    RankedLeaderboard { entries, snapshot }
}
