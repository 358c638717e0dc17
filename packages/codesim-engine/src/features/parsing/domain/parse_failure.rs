//! Structural extraction failures

use thiserror::Error;

/// Why a source text produced no structural sequence
///
/// Callers of [`extract_or_empty`](crate::features::parsing::extract_or_empty)
/// never see this: a failure there becomes an empty sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// The grammar rejected the source
    #[error("syntax error at line {line}, column {column} ({error_count} error node(s))")]
    Syntax {
        error_count: usize,
        /// 1-based line of the first error node
        line: usize,
        /// 0-based column of the first error node
        column: usize,
    },

    /// The grammar could not be loaded into the parser
    #[error("failed to load grammar: {0}")]
    Language(String),

    /// The parser gave up without producing a tree
    #[error("parser produced no tree")]
    Aborted,
}
