//! Structural Extractor Port
//!
//! Contract for turning source text into a structural label sequence.
//! Each supported language provides one implementation.

use tracing::debug;

use super::LanguageId;
use crate::features::parsing::domain::{ParseFailure, StructuralSequence};

/// Structural extractor trait
///
/// Implementations must be deterministic: the same source always yields the
/// same sequence. Failures are reported as [`ParseFailure`] values, never as
/// panics.
pub trait StructuralExtractor: Send + Sync {
    /// Language handled by this extractor
    fn language(&self) -> LanguageId;

    /// Extract the structural label sequence of `source`
    fn extract(&self, source: &str) -> Result<StructuralSequence, ParseFailure>;

    /// Remove comments and blank lines (used before classification)
    ///
    /// Returns the source with blank lines removed when the grammar cannot
    /// locate comments.
    fn strip_comments(&self, source: &str) -> String;
}

/// Extract a structural sequence, degrading to an empty one on failure
///
/// One malformed submission must not abort a batch: it simply scores zero
/// structural similarity against every non-empty sequence. The flag is
/// `false` when the source did not parse.
pub fn extract_with_status(
    extractor: &dyn StructuralExtractor,
    source: &str,
) -> (StructuralSequence, bool) {
    match extractor.extract(source) {
        Ok(sequence) => (sequence, true),
        Err(failure) => {
            debug!(
                "{} structural extraction failed, using empty sequence: {}",
                extractor.language(),
                failure
            );
            (StructuralSequence::empty(), false)
        }
    }
}

/// [`extract_with_status`] without the flag
pub fn extract_or_empty(extractor: &dyn StructuralExtractor, source: &str) -> StructuralSequence {
    extract_with_status(extractor, source).0
}
