//! Leaderboard tally

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use super::SimilarityMatch;

/// Submission ranked by how many others it matched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Submission identifier
    pub student: String,

    /// Number of above-threshold matches
    pub sim_count: usize,
}

/// Tally match participation, descending by count
///
/// Ties keep first-seen order (`student_1` is seen before `student_2`).
/// Submissions without any match are absent.
pub fn build_leaderboard(matches: &[SimilarityMatch]) -> Vec<LeaderboardEntry> {
    let mut index: AHashMap<&str, usize> = AHashMap::new();
    let mut entries: Vec<LeaderboardEntry> = Vec::new();

    for m in matches {
        for student in [m.student_1.as_str(), m.student_2.as_str()] {
            match index.get(student) {
                Some(&slot) => entries[slot].sim_count += 1,
                None => {
                    index.insert(student, entries.len());
                    entries.push(LeaderboardEntry {
                        student: student.to_string(),
                        sim_count: 1,
                    });
                }
            }
        }
    }

    // stable: equal counts stay in first-seen order
    entries.sort_by(|a, b| b.sim_count.cmp(&a.sim_count));
    entries
}
