//! Similarity domain models
//!
//! ```text
//! domain/
//! ├── matching_block.rs    # (a, b, size) alignment triple
//! ├── sequence_matcher.rs  # longest-block recursion + ratio
//! ├── fingerprint.rs       # per-text comparable views
//! └── pairwise_result.rs   # raw and reported scores
//! ```

mod fingerprint;
mod matching_block;
mod pairwise_result;
mod sequence_matcher;

pub use fingerprint::Fingerprint;
pub use matching_block::MatchingBlock;
pub use pairwise_result::{round_to, PairwiseResult, RawScore};
pub use sequence_matcher::{SequenceMatcher, AUTOJUNK_MIN_LEN};
