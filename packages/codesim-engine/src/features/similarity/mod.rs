//! Pairwise Similarity
//!
//! Alignment-based scoring of two submissions:
//! - structural ratio over the parse-tree label sequences
//! - token ratio over the whitespace-free character streams
//! - blended percentage: `round((structural + token) / 2, 2)`
//! - copied spans: long matching blocks between the two raw texts
//!
//! # Hexagonal Architecture
//!
//! ```text
//! External (api / batch)
//!           ↓
//! application/ (ScorePairUseCase - entry point)
//!           ↓
//! domain/ (SequenceMatcher, MatchingBlock, Fingerprint, results)
//!           ↓
//! infrastructure/ (PairScorer, CopiedSpanExtractor)
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export application layer (primary interface)
pub use application::{ScorePairInput, ScorePairUseCase, ScorePairUseCaseImpl};

// Re-export domain types
pub use domain::{
    round_to, Fingerprint, MatchingBlock, PairwiseResult, RawScore, SequenceMatcher,
};

pub use infrastructure::{CopiedSpanExtractor, PairScorer};
