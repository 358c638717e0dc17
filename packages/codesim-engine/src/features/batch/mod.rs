//! Batch Comparison
//!
//! Every unordered pair of a submission set is scored (structural + token,
//! no span extraction), pairs at or above the threshold become matches, and
//! the matches are tallied into a leaderboard of repeat offenders.
//!
//! O(n²) pairs, each linear-ish in text length: sized for classroom batches
//! (tens to low hundreds of submissions).

pub mod application;
pub mod domain;

pub use application::{
    CompareBatchInput, CompareBatchUseCase, CompareBatchUseCaseImpl,
};
pub use domain::{build_leaderboard, BatchReport, BatchStats, LeaderboardEntry, SimilarityMatch};
