//! Batch comparison report

use serde::{Deserialize, Serialize};

use super::LeaderboardEntry;

/// One above-threshold pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatch {
    /// First submission identifier (earlier in input order)
    pub student_1: String,

    /// Second submission identifier
    pub student_2: String,

    /// Blended similarity percentage (2 decimals)
    pub similarity_percent: f64,

    /// Structural similarity percentage (2 decimals)
    pub ast_similarity: f64,

    /// Token similarity percentage (2 decimals)
    pub token_similarity: f64,
}

impl SimilarityMatch {
    pub fn involves(&self, identifier: &str) -> bool {
        self.student_1 == identifier || self.student_2 == identifier
    }
}

/// Batch run statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchStats {
    pub total_submissions: usize,
    pub pairs_compared: usize,
    pub matches_found: usize,

    /// Submissions whose structure could not be parsed (token score only)
    pub unparseable: Vec<String>,

    pub threshold: f64,
    pub execution_time_ms: u64,
}

/// Output of a batch comparison
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Above-threshold pairs, in pair enumeration order
    pub matches: Vec<SimilarityMatch>,

    /// Submissions ranked by match count
    pub leaderboard: Vec<LeaderboardEntry>,

    pub stats: BatchStats,
}

impl BatchReport {
    /// Matches one submission takes part in
    pub fn matches_for<'a>(&'a self, identifier: &'a str) -> impl Iterator<Item = &'a SimilarityMatch> + 'a {
        self.matches.iter().filter(move |m| m.involves(identifier))
    }
}
