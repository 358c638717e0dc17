//! Batch domain models

mod batch_report;
mod leaderboard;

pub use batch_report::{BatchReport, BatchStats, SimilarityMatch};
pub use leaderboard::{build_leaderboard, LeaderboardEntry};
