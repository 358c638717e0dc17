//! Matching block

use serde::{Deserialize, Serialize};

/// Maximal common contiguous run: `a[a..a+size] == b[b..b+size]`
///
/// A block list always ends with the zero-length sentinel
/// `(len(a), len(b), 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchingBlock {
    /// Offset in the first sequence
    pub a: usize,
    /// Offset in the second sequence
    pub b: usize,
    /// Run length
    pub size: usize,
}

impl MatchingBlock {
    pub fn new(a: usize, b: usize, size: usize) -> Self {
        Self { a, b, size }
    }

    pub fn is_sentinel(&self) -> bool {
        self.size == 0
    }

    pub fn a_end(&self) -> usize {
        self.a + self.size
    }

    pub fn b_end(&self) -> usize {
        self.b + self.size
    }
}

impl From<(usize, usize, usize)> for MatchingBlock {
    fn from((a, b, size): (usize, usize, usize)) -> Self {
        Self::new(a, b, size)
    }
}
