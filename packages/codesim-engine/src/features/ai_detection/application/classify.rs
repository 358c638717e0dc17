//! Classify UseCase Implementation

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::features::ai_detection::domain::{normalize, AiDetectionResult, Classification};
use crate::features::ai_detection::ports::{ClassifierError, TextClassifier};
use crate::features::parsing::StructuralExtractor;

/// Classify UseCase Trait
pub trait ClassifyUseCase: Send + Sync {
    /// AI/human likelihood of `source`; failures are reported in `error`
    fn classify_ai_likelihood(&self, source: &str) -> AiDetectionResult;
}

/// Classify UseCase Implementation
pub struct ClassifyUseCaseImpl {
    extractor: Arc<dyn StructuralExtractor>,
    classifier: Arc<dyn TextClassifier>,
    max_length: usize,
}

impl ClassifyUseCaseImpl {
    pub fn new(
        extractor: Arc<dyn StructuralExtractor>,
        classifier: Arc<dyn TextClassifier>,
        max_length: usize,
    ) -> Self {
        Self {
            extractor,
            classifier,
            max_length,
        }
    }

    /// Call the injected model; a panic inside it becomes a model error
    fn call_classifier(&self, text: &str) -> Result<Classification, ClassifierError> {
        panic::catch_unwind(AssertUnwindSafe(|| self.classifier.classify(text, self.max_length)))
            .unwrap_or_else(|payload| {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "classifier panicked".to_string());
                Err(ClassifierError::Model(reason))
            })
    }

    fn check(classification: Classification) -> Result<Classification, ClassifierError> {
        let score = classification.score;
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(ClassifierError::InvalidOutput(format!(
                "score {} for label '{}' is outside [0, 1]",
                score, classification.label
            )));
        }
        Ok(classification)
    }
}

impl ClassifyUseCase for ClassifyUseCaseImpl {
    fn classify_ai_likelihood(&self, source: &str) -> AiDetectionResult {
        let cleaned = self.extractor.strip_comments(source);
        if cleaned.trim().is_empty() {
            debug!("No code left after comment stripping");
            return AiDetectionResult::empty_input();
        }

        match self.call_classifier(&cleaned).and_then(Self::check) {
            Ok(classification) => normalize(&classification),
            Err(e) => {
                warn!("AI classification failed: {}", e);
                AiDetectionResult::failed(e.to_string())
            }
        }
    }
}
