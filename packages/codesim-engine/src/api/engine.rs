//! CodesimEngine - similarity and AI-likelihood operations
//!
//! Built once from an [`EngineConfig`]; every operation is stateless and the
//! engine is `Send + Sync`, so one instance can serve concurrent callers.

use std::path::Path;
use std::sync::Arc;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, EngineConfig};
use crate::errors::{CodesimError, Result};
use crate::features::ai_detection::{
    AiDetectionResult, ClassifyUseCase, ClassifyUseCaseImpl, TextClassifier,
};
use crate::features::batch::{
    BatchReport, CompareBatchInput, CompareBatchUseCase, CompareBatchUseCaseImpl,
};
use crate::features::parsing::{ExtractorRegistry, StructuralExtractor};
use crate::features::similarity::{
    PairwiseResult, ScorePairInput, ScorePairUseCase, ScorePairUseCaseImpl,
};
use crate::features::submission_store::{SkippedFile, SubmissionStore};
use crate::shared::{Submission, SubmissionId};

/// Error marker when AI detection is requested without a classifier
pub const NO_CLASSIFIER_ERROR: &str = "No classifier configured";

/// Batch comparison of a submission directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreComparison {
    #[serde(flatten)]
    pub report: BatchReport,

    /// Files that could not be decoded as text
    pub skipped: Vec<SkippedFile>,
}

/// Similarity engine
pub struct CodesimEngine {
    config: EngineConfig,
    extractor: Arc<dyn StructuralExtractor>,
    pair: ScorePairUseCaseImpl,
    batch: CompareBatchUseCaseImpl,
    classify: Option<ClassifyUseCaseImpl>,
}

impl CodesimEngine {
    /// Build an engine for the configured language
    pub fn new(config: EngineConfig) -> Result<Self> {
        let registry = ExtractorRegistry::with_defaults();
        let extractor = registry
            .get(config.language)
            .ok_or_else(|| ConfigError::UnknownLanguage(config.language.to_string()))?;
        Self::with_extractor(config, extractor)
    }

    /// Build an engine around a caller-provided extractor
    pub fn with_extractor(
        config: EngineConfig,
        extractor: Arc<dyn StructuralExtractor>,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            pair: ScorePairUseCaseImpl::new(extractor.clone(), &config),
            batch: CompareBatchUseCaseImpl::new(extractor.clone(), &config),
            classify: None,
            extractor,
            config,
        })
    }

    /// Attach the AI-detection classifier
    pub fn with_classifier(mut self, classifier: Arc<dyn TextClassifier>) -> Self {
        self.classify = Some(ClassifyUseCaseImpl::new(
            self.extractor.clone(),
            classifier,
            self.config.classifier_max_length,
        ));
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn has_classifier(&self) -> bool {
        self.classify.is_some()
    }

    /// Structural, token and blended similarity of two texts
    pub fn score_pair(&self, text_a: &str, text_b: &str) -> PairwiseResult {
        self.pair.score_pair(ScorePairInput::new(text_a, text_b))
    }

    /// [`score_pair`](Self::score_pair) plus the copied spans of `text_a`
    ///
    /// `min_span_length` overrides the configured minimum; it must be at
    /// least 1.
    pub fn score_pair_with_spans(
        &self,
        text_a: &str,
        text_b: &str,
        min_span_length: Option<usize>,
    ) -> Result<PairwiseResult> {
        if min_span_length == Some(0) {
            return Err(ConfigError::range_with_hint(
                "min_span_length",
                0,
                1,
                10_000,
                "Spans of a single character are never meaningful copies",
            )
            .into());
        }

        Ok(self
            .pair
            .score_pair(ScorePairInput::new(text_a, text_b).with_spans(min_span_length)))
    }

    /// All pairs at or above `threshold` (configured default when `None`)
    ///
    /// Identifiers must be unique within the batch.
    pub fn compare_batch(
        &self,
        submissions: &[Submission],
        threshold: Option<f64>,
    ) -> Result<BatchReport> {
        let mut seen: AHashSet<&str> = AHashSet::with_capacity(submissions.len());
        for submission in submissions {
            if !seen.insert(submission.identifier()) {
                return Err(CodesimError::submission(format!(
                    "duplicate submission identifier '{}'",
                    submission.identifier()
                )));
            }
        }

        let mut input = CompareBatchInput::new(submissions);
        if let Some(threshold) = threshold {
            if !threshold.is_finite() || !(0.0..=100.0).contains(&threshold) {
                return Err(ConfigError::range_with_hint(
                    "threshold",
                    threshold,
                    0,
                    100,
                    "Threshold is a similarity percentage",
                )
                .into());
            }
            input = input.with_threshold(threshold);
        }

        Ok(self.batch.compare_batch(input))
    }

    /// Load a submission directory and compare it as one batch
    pub fn compare_store(
        &self,
        dir: impl AsRef<Path>,
        threshold: Option<f64>,
    ) -> Result<StoreComparison> {
        let loaded = SubmissionStore::open(dir)?.load()?;
        let report = self.compare_batch(&loaded.submissions, threshold)?;

        Ok(StoreComparison {
            report,
            skipped: loaded.skipped,
        })
    }

    /// Identifiers stored in a submission directory
    pub fn list_submissions(&self, dir: impl AsRef<Path>) -> Result<Vec<SubmissionId>> {
        SubmissionStore::open(dir)?.list_submissions()
    }

    /// AI/human likelihood of `source`
    ///
    /// Never fails: empty input, classifier faults and a missing classifier
    /// all come back as zero-confidence results with `error` set.
    pub fn classify_ai_likelihood(&self, source: &str) -> AiDetectionResult {
        match &self.classify {
            Some(usecase) => usecase.classify_ai_likelihood(source),
            None => AiDetectionResult::failed(NO_CLASSIFIER_ERROR),
        }
    }
}
