//! Copied-span extractor
//!
//! Matching blocks between the raw character sequences of two texts; every
//! block strictly longer than `min_length` characters is reported as the
//! corresponding substring of the first text, left to right.

use crate::features::similarity::domain::{MatchingBlock, SequenceMatcher};

/// Extracts long common runs from two raw texts
#[derive(Debug, Clone, Copy)]
pub struct CopiedSpanExtractor {
    min_length: usize,
    autojunk: bool,
}

impl CopiedSpanExtractor {
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            autojunk: true,
        }
    }

    pub fn with_autojunk(mut self, autojunk: bool) -> Self {
        self.autojunk = autojunk;
        self
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    fn long_blocks(&self, a: &[char], b: &[char]) -> Vec<MatchingBlock> {
        SequenceMatcher::with_autojunk(a, b, self.autojunk)
            .matching_blocks()
            .into_iter()
            .filter(|block| block.size > self.min_length)
            .collect()
    }

    /// Blocks longer than the minimum (sentinel excluded)
    pub fn copied_blocks(&self, text_a: &str, text_b: &str) -> Vec<MatchingBlock> {
        let a: Vec<char> = text_a.chars().collect();
        let b: Vec<char> = text_b.chars().collect();
        self.long_blocks(&a, &b)
    }

    /// Copied sections as substrings of `text_a`
    pub fn extract(&self, text_a: &str, text_b: &str) -> Vec<String> {
        let a: Vec<char> = text_a.chars().collect();
        let b: Vec<char> = text_b.chars().collect();

        self.long_blocks(&a, &b)
            .into_iter()
            .map(|block| a[block.a..block.a_end()].iter().collect())
            .collect()
    }
}

impl Default for CopiedSpanExtractor {
    fn default() -> Self {
        Self::new(crate::config::engine_config::DEFAULT_MIN_SPAN_LENGTH)
    }
}
