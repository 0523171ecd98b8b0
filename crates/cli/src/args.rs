use clap::{Subcommand, ValueEnum};
use rust_decimal::Decimal;
use scoring::models::{ActivityMetrics, ClimbDifficulty};

#[derive(Subcommand, Debug, Clone)]
pub enum ActivityArgs {
    /// Kills, deaths and assists from a combat match
    Combat {
        #[arg(long)]
        kills: u32,
        #[arg(long)]
        deaths: u32,
        #[arg(long, default_value_t = 0)]
        assists: u32,
    },
    Cycling {
        #[arg(long)]
        distance_km: Decimal,
        #[arg(long)]
        duration_seconds: u32,
    },
    Running {
        #[arg(long)]
        distance_km: Decimal,
        #[arg(long)]
        duration_minutes: Decimal,
    },
    Strength {
        #[arg(long)]
        reps: u32,
        #[arg(long)]
        sets: u32,
        #[arg(long)]
        weight_kg: Decimal,
    },
    Climbing {
        #[arg(long, value_enum)]
        difficulty: Difficulty,
        #[arg(long)]
        attempts: u32,
        #[arg(long, default_value_t = 1)]
        climb_count: u32,
    },
    /// Flat reward for finishing within a time limit
    Challenge {
        #[arg(long)]
        duration_seconds: u32,
        #[arg(long)]
        limit_seconds: u32,
        #[arg(long)]
        reward: u32,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    VeryEasy,
    Easy,
    Moderate,
    Difficult,
    VeryDifficult,
    Extreme,
}

impl From<Difficulty> for ClimbDifficulty {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::VeryEasy => Self::VeryEasy,
            Difficulty::Easy => Self::Easy,
            Difficulty::Moderate => Self::Moderate,
            Difficulty::Difficult => Self::Difficult,
            Difficulty::VeryDifficult => Self::VeryDifficult,
            Difficulty::Extreme => Self::Extreme,
        }
    }
}

impl From<ActivityArgs> for ActivityMetrics {
    fn from(args: ActivityArgs) -> Self {
        match args {
            ActivityArgs::Combat {
                kills,
                deaths,
                assists,
            } => Self::Combat {
                kills,
                deaths,
                assists,
            },
            ActivityArgs::Cycling {
                distance_km,
                duration_seconds,
            } => Self::Cycling {
                distance_km,
                duration_seconds,
            },
            ActivityArgs::Running {
                distance_km,
                duration_minutes,
            } => Self::Running {
                distance_km,
                duration_minutes,
            },
            ActivityArgs::Strength {
                reps,
                sets,
                weight_kg,
            } => Self::Strength {
                reps,
                sets,
                weight_kg,
            },
            ActivityArgs::Climbing {
                difficulty,
                attempts,
                climb_count,
            } => Self::Climbing {
                difficulty: difficulty.into(),
                attempts,
                climb_count,
            },
            ActivityArgs::Challenge {
                duration_seconds,
                limit_seconds,
                reward,
            } => Self::TimedChallenge {
                duration_seconds,
                limit_seconds,
                reward,
            },
        }
    }
}
