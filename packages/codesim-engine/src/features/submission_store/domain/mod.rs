//! Submission store domain models

use serde::{Deserialize, Serialize};

use crate::shared::Submission;

/// File left out of a load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub identifier: String,
    pub reason: String,
}

/// Result of loading a store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedSubmissions {
    /// Decoded submissions, ordered by file name
    pub submissions: Vec<Submission>,
    pub skipped: Vec<SkippedFile>,
}

impl LoadedSubmissions {
    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }
}
