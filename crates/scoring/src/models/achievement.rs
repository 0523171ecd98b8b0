use std::fmt;

use super::statistics::UserStatisticsSnapshot;

pub type AchievementPredicate = fn(&UserStatisticsSnapshot) -> bool;

/// A statically defined achievement, unlocked whenever its predicate holds.
#[derive(Clone, Copy)]
pub struct AchievementDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub reward: u32,
    pub predicate: AchievementPredicate,
}

impl AchievementDefinition {
    pub const fn new(
        id: &'static str,
        title: &'static str,
        description: &'static str,
        reward: u32,
        predicate: AchievementPredicate,
    ) -> Self {
        Self {
            id,
            title,
            description,
            reward,
            predicate,
        }
    }

    pub fn is_unlocked(&self, snapshot: &UserStatisticsSnapshot) -> bool {
        (self.predicate)(snapshot)
    }
}

impl fmt::Debug for AchievementDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AchievementDefinition")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("reward", &self.reward)
            .finish_non_exhaustive()
    }
}
