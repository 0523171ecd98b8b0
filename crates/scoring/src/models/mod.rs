pub mod achievement;
pub mod activity;
pub mod leaderboard;
pub mod performance;
pub mod profile;
pub mod reward;
pub mod statistics;

pub use achievement::{AchievementDefinition, AchievementPredicate};
pub use activity::{ActivityKind, ActivityMetrics, ClimbDifficulty, MatchOutcome};
pub use leaderboard::{LeaderboardEntry, ProfileStyle, RankMovement, RankSnapshot, Standing};
pub use performance::PerformanceRecord;
pub use profile::UserProfile;
pub use reward::{PullRecord, RewardEntry, RewardPool};
pub use statistics::{ActivityTotals, UserStatisticsSnapshot};
