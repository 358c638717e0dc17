//! Text Classifier Port
//!
//! Contract for the external pretrained model. The model itself lives outside
//! this crate; callers inject an implementation into the engine.

use thiserror::Error;

use crate::features::ai_detection::domain::Classification;

/// Classifier failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifierError {
    /// The model raised an error
    #[error("Model error: {0}")]
    Model(String),

    /// The model returned something outside its contract
    #[error("Invalid classifier output: {0}")]
    InvalidOutput(String),
}

/// Text classifier trait
pub trait TextClassifier: Send + Sync {
    /// Classify `text`, truncated by the model to `max_length` units
    fn classify(&self, text: &str, max_length: usize) -> Result<Classification, ClassifierError>;
}

impl<F> TextClassifier for F
where
    F: Fn(&str, usize) -> Result<Classification, ClassifierError> + Send + Sync,
{
    fn classify(&self, text: &str, max_length: usize) -> Result<Classification, ClassifierError> {
        self(text, max_length)
    }
}
