//! Error types for codesim-engine
//!
//! Provides unified error handling across the crate. Per-item data problems
//! (unparseable submissions, undecodable files, classifier faults) are absorbed
//! into result values; this type is for the requests that cannot proceed.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::ai_detection::ClassifierError;
use crate::features::parsing::ParseFailure;

/// Main error type for codesim-engine operations
#[derive(Debug, Error)]
pub enum CodesimError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] ParseFailure),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Classifier error
    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    /// Submission store error
    #[error("Submission error: {0}")]
    Submission(String),
}

impl CodesimError {
    /// Create a submission store error
    pub fn submission(msg: impl Into<String>) -> Self {
        CodesimError::Submission(msg.into())
    }
}

/// Result type alias for codesim operations
pub type Result<T> = std::result::Result<T, CodesimError>;
