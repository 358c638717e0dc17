//! Pair scorer
//!
//! Structural ratio + token ratio of two fingerprints. The raw alignment is
//! not symmetric in its arguments (tie-breaking, auto-junk only looks at the
//! second sequence), so both ratios are computed on the canonical ordering of
//! the pair.

use std::cmp::Ordering;

use crate::features::similarity::domain::{Fingerprint, RawScore, SequenceMatcher};

/// Scores fingerprint pairs
#[derive(Debug, Clone, Copy)]
pub struct PairScorer {
    autojunk: bool,
}

impl Default for PairScorer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl PairScorer {
    pub fn new(autojunk: bool) -> Self {
        Self { autojunk }
    }

    /// Unrounded structural and token percentages
    pub fn score(&self, first: &Fingerprint, second: &Fingerprint) -> RawScore {
        let (a, b) = match first.canonical_cmp(second) {
            Ordering::Greater => (second, first),
            _ => (first, second),
        };

        let structural = SequenceMatcher::with_autojunk(
            a.structure.labels(),
            b.structure.labels(),
            self.autojunk,
        )
        .ratio();

        let token =
            SequenceMatcher::with_autojunk(a.tokens.chars(), b.tokens.chars(), self.autojunk)
                .ratio();

        RawScore::new(structural * 100.0, token * 100.0)
    }
}
