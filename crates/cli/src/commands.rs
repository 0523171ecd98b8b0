//! Subcommand bodies. Each takes already-loaded inputs and returns the text to print.

use std::fmt::Write;

use rand::Rng;
use scoring::models::{
    AchievementDefinition, ActivityMetrics, RankMovement, RankSnapshot, RewardPool, Standing,
    UserStatisticsSnapshot,
};
use scoring::services::{achievements, formulas, leaderboard, selector};
use tracing::info;

use crate::error::Result;

pub fn score(metrics: &ActivityMetrics) -> Result<String> {
    let points = formulas::score(metrics)?;
    Ok(format!("{} points ({})", points.normalize(), metrics.kind().as_str()))
}

/// One line per pull: the reward id, then its label when the pool has one.
pub fn pull<R: Rng + ?Sized>(pool: &RewardPool, count: usize, rng: &mut R) -> String {
    let mut out = String::new();
    for entry in selector::pull(pool, count, rng) {
        match &entry.label {
            Some(label) => {
                let _ = writeln!(out, "{}\t{}", entry.id, label);
            }
            None => {
                let _ = writeln!(out, "{}", entry.id);
            }
        }
    }

    info!("Resolved {} pull(s) from {}", count, pool.source());
    out
}

pub fn achievements(definitions: &[AchievementDefinition], snapshot: &UserStatisticsSnapshot) -> String {
    let report = achievements::evaluate(definitions, snapshot);
    let mut out = String::new();

    for definition in definitions
        .iter()
        .filter(|d| report.unlocked.contains(&d.id))
    {
        let _ = writeln!(
            out,
            "{:<16} {:<16} +{}",
            definition.id, definition.title, definition.reward
        );
    }
    let _ = writeln!(
        out,
        "{} unlocked, {} points",
        report.unlocked.len(),
        report.total_points
    );

    out
}

/// Renders the ranking and returns the snapshot to persist for the next run.
pub fn leaderboard(standings: Vec<Standing>, previous: &RankSnapshot) -> (String, RankSnapshot) {
    let ranked = leaderboard::rank(standings, previous);
    let mut out = String::new();

    for entry in &ranked.entries {
        let name = if entry.display_name.is_empty() {
            entry.subject_id.to_string()
        } else {
            entry.display_name.clone()
        };
        let modified = entry
            .modified_total
            .map(|m| m.normalize().to_string())
            .unwrap_or_else(|| "-".to_string());

        let _ = writeln!(
            out,
            "{:>3} {} {:<36} {:>10} {:>10}",
            entry.display_rank(),
            RankMovement::arrow(entry.movement),
            name,
            entry.total_score.normalize(),
            modified
        );
    }

    (out, ranked.snapshot)
}
