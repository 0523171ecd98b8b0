use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Family of logged activity, used to bucket statistics and split eSport from Sport points.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    CombatGame,
    DistanceSport,
    StrengthExercise,
    TimedChallenge,
    Climbing,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 5] = [
        Self::CombatGame,
        Self::DistanceSport,
        Self::StrengthExercise,
        Self::TimedChallenge,
        Self::Climbing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CombatGame => "combat_game",
            Self::DistanceSport => "distance_sport",
            Self::StrengthExercise => "strength_exercise",
            Self::TimedChallenge => "timed_challenge",
            Self::Climbing => "climbing",
        }
    }

    /// Only combat games feed the eSport score; everything else is Sport.
    pub fn is_esport(&self) -> bool {
        matches!(self, Self::CombatGame)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Win,
    Loss,
    Draw,
}

/// Route grade of a climbing session, easiest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClimbDifficulty {
    VeryEasy,
    Easy,
    Moderate,
    Difficult,
    VeryDifficult,
    Extreme,
}

impl ClimbDifficulty {
    pub fn tier(&self) -> usize {
        match self {
            Self::VeryEasy => 0,
            Self::Easy => 1,
            Self::Moderate => 2,
            Self::Difficult => 3,
            Self::VeryDifficult => 4,
            Self::Extreme => 5,
        }
    }
}

/// Upper bound on any logged distance. Keeps every formula result well inside `Decimal` range.
pub const MAX_DISTANCE_KM: u32 = 100_000;

/// Upper bound on a strength set's load.
pub const MAX_WEIGHT_KG: u32 = 10_000;

/// Raw performance inputs, one variant per scoring formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "activity", rename_all = "snake_case")]
pub enum ActivityMetrics {
    Combat {
        kills: u32,
        deaths: u32,
        assists: u32,
    },
    Cycling {
        distance_km: Decimal,
        duration_seconds: u32,
    },
    Running {
        distance_km: Decimal,
        duration_minutes: Decimal,
    },
    Strength {
        reps: u32,
        sets: u32,
        weight_kg: Decimal,
    },
    Climbing {
        difficulty: ClimbDifficulty,
        attempts: u32,
        climb_count: u32,
    },
    TimedChallenge {
        duration_seconds: u32,
        limit_seconds: u32,
        reward: u32,
    },
}

impl ActivityMetrics {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Self::Combat { .. } => ActivityKind::CombatGame,
            Self::Cycling { .. } | Self::Running { .. } => ActivityKind::DistanceSport,
            Self::Strength { .. } => ActivityKind::StrengthExercise,
            Self::Climbing { .. } => ActivityKind::Climbing,
            Self::TimedChallenge { .. } => ActivityKind::TimedChallenge,
        }
    }

    /// Rejects inputs the formulas are not defined for. Must pass before scoring.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::Combat { .. } => Ok(()),
            Self::Cycling {
                distance_km,
                duration_seconds,
            } => {
                check_distance(*distance_km)?;
                if *duration_seconds == 0 {
                    return Err("duration_seconds must be > 0".to_string());
                }
                Ok(())
            }
            Self::Running {
                distance_km,
                duration_minutes,
            } => {
                check_distance(*distance_km)?;
                if *duration_minutes <= Decimal::ZERO {
                    return Err("duration_minutes must be > 0".to_string());
                }
                Ok(())
            }
            Self::Strength {
                reps,
                sets,
                weight_kg,
            } => {
                if *reps == 0 || *sets == 0 {
                    return Err("reps and sets must be > 0".to_string());
                }
                if *weight_kg < Decimal::ZERO {
                    return Err("weight_kg must be >= 0".to_string());
                }
                if *weight_kg > Decimal::from(MAX_WEIGHT_KG) {
                    return Err(format!("weight_kg must be <= {}", MAX_WEIGHT_KG));
                }
                Ok(())
            }
            Self::Climbing { climb_count, .. } => {
                if *climb_count == 0 {
                    return Err("climb_count must be > 0".to_string());
                }
                Ok(())
            }
            Self::TimedChallenge {
                duration_seconds,
                limit_seconds,
                ..
            } => {
                if *duration_seconds == 0 || *limit_seconds == 0 {
                    return Err("duration_seconds and limit_seconds must be > 0".to_string());
                }
                Ok(())
            }
        }
    }
}

fn check_distance(distance_km: Decimal) -> Result<(), String> {
    if distance_km <= Decimal::ZERO {
        return Err("distance_km must be > 0".to_string());
    }
    if distance_km > Decimal::from(MAX_DISTANCE_KM) {
        return Err(format!("distance_km must be <= {}", MAX_DISTANCE_KM));
    }
    Ok(())
}
