use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{ActivityKind, AchievementDefinition, UserStatisticsSnapshot};

/// Built-in achievements, in display order.
pub fn catalogue() -> Vec<AchievementDefinition> {
    vec![
        AchievementDefinition::new(
            "first_steps",
            "First Steps",
            "Log your first activity.",
            10,
            |s| s.total_sessions() >= 1,
        ),
        AchievementDefinition::new(
            "first_blood",
            "First Blood",
            "Win your first match.",
            20,
            |s| s.total_wins() >= 1,
        ),
        AchievementDefinition::new(
            "veteran",
            "Veteran",
            "Win ten matches.",
            50,
            |s| s.total_wins() >= 10,
        ),
        AchievementDefinition::new(
            "regular",
            "Regular",
            "Log fifty activities.",
            75,
            |s| s.total_sessions() >= 50,
        ),
        AchievementDefinition::new(
            "contender",
            "Contender",
            "Reach a rating of 1500.",
            100,
            |s| s.best_rating() >= 1500,
        ),
        AchievementDefinition::new(
            "esport_thousand",
            "Pixel Pusher",
            "Earn 1000 eSport points.",
            100,
            |s| s.esport_points() >= Decimal::ONE_THOUSAND,
        ),
        AchievementDefinition::new(
            "sport_thousand",
            "Iron Lungs",
            "Earn 1000 Sport points.",
            100,
            |s| s.sport_points() >= Decimal::ONE_THOUSAND,
        ),
        AchievementDefinition::new(
            "all_rounder",
            "All-Rounder",
            "Log at least one session of every activity kind.",
            150,
            |s| {
                ActivityKind::ALL
                    .iter()
                    .all(|kind| s.totals_for(*kind).sessions > 0)
            },
        ),
        AchievementDefinition::new(
            "unbeaten",
            "Unbeaten",
            "Win five matches without a single loss.",
            120,
            |s| s.total_wins() >= 5 && s.total_losses() == 0,
        ),
        AchievementDefinition::new(
            "summit",
            "Summit",
            "Complete ten climbing sessions.",
            60,
            |s| s.totals_for(ActivityKind::Climbing).sessions >= 10,
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementReport {
    /// Ids of unlocked achievements, in definition order.
    pub unlocked: Vec<&'static str>,
    pub total_points: u64,
}

/// Evaluates every definition against the snapshot.
///
/// Nothing is remembered between calls: the same snapshot always yields the
/// same report.
pub fn evaluate(
    definitions: &[AchievementDefinition],
    snapshot: &UserStatisticsSnapshot,
) -> AchievementReport {
    let unlocked: Vec<&AchievementDefinition> = definitions
        .iter()
        .filter(|definition| definition.is_unlocked(snapshot))
        .collect();

    AchievementReport {
        total_points: unlocked.iter().map(|d| u64::from(d.reward)).sum(),
        unlocked: unlocked.iter().map(|d| d.id).collect(),
    }
}
