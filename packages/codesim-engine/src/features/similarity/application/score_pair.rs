//! Score Pair UseCase Implementation

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::features::parsing::StructuralExtractor;
use crate::features::similarity::domain::{Fingerprint, PairwiseResult, RawScore};
use crate::features::similarity::infrastructure::{CopiedSpanExtractor, PairScorer};

/// Input for pairwise scoring
#[derive(Debug, Clone, Copy)]
pub struct ScorePairInput<'a> {
    pub text_a: &'a str,
    pub text_b: &'a str,

    /// Also extract copied spans from `text_a`
    pub extract_spans: bool,

    /// Override of the configured minimum span length
    pub min_span_length: Option<usize>,
}

impl<'a> ScorePairInput<'a> {
    pub fn new(text_a: &'a str, text_b: &'a str) -> Self {
        Self {
            text_a,
            text_b,
            extract_spans: false,
            min_span_length: None,
        }
    }

    pub fn with_spans(mut self, min_span_length: Option<usize>) -> Self {
        self.extract_spans = true;
        self.min_span_length = min_span_length;
        self
    }
}

/// Score Pair UseCase Trait
pub trait ScorePairUseCase: Send + Sync {
    /// Blended similarity of two texts, optionally with copied spans
    fn score_pair(&self, input: ScorePairInput) -> PairwiseResult;

    /// Unrounded structural and token percentages
    fn raw_score(&self, text_a: &str, text_b: &str) -> RawScore;
}

/// Score Pair UseCase Implementation
pub struct ScorePairUseCaseImpl {
    extractor: Arc<dyn StructuralExtractor>,
    scorer: PairScorer,
    min_span_length: usize,
    autojunk: bool,
}

impl ScorePairUseCaseImpl {
    pub fn new(extractor: Arc<dyn StructuralExtractor>, config: &EngineConfig) -> Self {
        Self {
            extractor,
            scorer: PairScorer::new(config.autojunk),
            min_span_length: config.min_span_length,
            autojunk: config.autojunk,
        }
    }

    pub fn fingerprint(&self, source: &str) -> Fingerprint {
        Fingerprint::compute(self.extractor.as_ref(), source)
    }
}

impl ScorePairUseCase for ScorePairUseCaseImpl {
    fn score_pair(&self, input: ScorePairInput) -> PairwiseResult {
        let result = self.raw_score(input.text_a, input.text_b).to_result();

        if !input.extract_spans {
            return result;
        }

        let min_length = input.min_span_length.unwrap_or(self.min_span_length);
        let sections = CopiedSpanExtractor::new(min_length)
            .with_autojunk(self.autojunk)
            .extract(input.text_a, input.text_b);

        result.with_copied_sections(sections)
    }

    fn raw_score(&self, text_a: &str, text_b: &str) -> RawScore {
        let a = self.fingerprint(text_a);
        let b = self.fingerprint(text_b);
        self.scorer.score(&a, &b)
    }
}
