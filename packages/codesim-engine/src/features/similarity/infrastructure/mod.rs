//! Similarity infrastructure

mod pair_scorer;
mod span_extractor;

pub use pair_scorer::PairScorer;
pub use span_extractor::CopiedSpanExtractor;
