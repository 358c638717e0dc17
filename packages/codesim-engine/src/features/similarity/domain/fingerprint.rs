//! Per-text comparable views

use std::cmp::Ordering;

use crate::features::parsing::{extract_with_status, StructuralExtractor, StructuralSequence, TokenStream};

/// Structural sequence and token stream of one text
///
/// Computed once per submission; every pairwise comparison reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fingerprint {
    pub structure: StructuralSequence,
    pub tokens: TokenStream,
}

impl Fingerprint {
    pub fn new(structure: StructuralSequence, tokens: TokenStream) -> Self {
        Self { structure, tokens }
    }

    /// Compute both views of `source`; unparseable sources get an empty structure
    pub fn compute(extractor: &dyn StructuralExtractor, source: &str) -> Self {
        Self::compute_with_status(extractor, source).0
    }

    /// [`compute`](Self::compute), also reporting whether the structure parsed
    pub fn compute_with_status(extractor: &dyn StructuralExtractor, source: &str) -> (Self, bool) {
        let (structure, parsed) = extract_with_status(extractor, source);
        let tokens = TokenStream::normalize(source);
        (Self { structure, tokens }, parsed)
    }

    /// Total order used to put a pair into canonical argument order
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.tokens
            .len()
            .cmp(&other.tokens.len())
            .then_with(|| self.tokens.chars().cmp(other.tokens.chars()))
            .then_with(|| self.structure.len().cmp(&other.structure.len()))
            .then_with(|| self.structure.labels().cmp(other.structure.labels()))
    }
}
