pub mod achievement;
pub mod common;
pub mod invocation;
pub mod leaderboard;
pub mod performance;
pub mod profile;
