pub mod achievements;
pub mod formulas;
pub mod leaderboard;
pub mod selector;
pub mod tracker;
