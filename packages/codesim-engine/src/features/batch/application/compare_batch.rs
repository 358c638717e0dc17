//! Compare Batch UseCase Implementation
//!
//! Fingerprints are computed once per submission. Pairs are enumerated in
//! combination order `(0,1), (0,2), …, (1,2), …`; with `parallel` enabled the
//! indexed pair list is scored on a rayon pool and collected back in that
//! order, and the leaderboard is tallied afterwards from the ordered match
//! list, so parallel and sequential runs produce identical reports.

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::features::batch::domain::{build_leaderboard, BatchReport, BatchStats, SimilarityMatch};
use crate::features::parsing::StructuralExtractor;
use crate::features::similarity::{round_to, Fingerprint, PairScorer};
use crate::shared::Submission;

/// Input for batch comparison
#[derive(Debug, Clone, Copy)]
pub struct CompareBatchInput<'a> {
    pub submissions: &'a [Submission],

    /// Match threshold in percent; configured default when `None`
    pub threshold: Option<f64>,
}

impl<'a> CompareBatchInput<'a> {
    pub fn new(submissions: &'a [Submission]) -> Self {
        Self {
            submissions,
            threshold: None,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }
}

/// Compare Batch UseCase Trait
pub trait CompareBatchUseCase: Send + Sync {
    /// Score all unordered pairs and build the leaderboard
    fn compare_batch(&self, input: CompareBatchInput) -> BatchReport;
}

/// Compare Batch UseCase Implementation
pub struct CompareBatchUseCaseImpl {
    extractor: Arc<dyn StructuralExtractor>,
    scorer: PairScorer,
    default_threshold: f64,
    pool: Option<rayon::ThreadPool>,
}

impl CompareBatchUseCaseImpl {
    pub fn new(extractor: Arc<dyn StructuralExtractor>, config: &EngineConfig) -> Self {
        let pool = if config.parallel {
            let threads = config.effective_worker_threads();
            match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                Ok(pool) => Some(pool),
                Err(e) => {
                    warn!("Failed to build batch thread pool, running sequentially: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Self {
            extractor,
            scorer: PairScorer::new(config.autojunk),
            default_threshold: config.threshold,
            pool,
        }
    }

    /// Fingerprint one submission; returns whether its structure parsed
    fn fingerprint(&self, submission: &Submission) -> (Fingerprint, bool) {
        Fingerprint::compute_with_status(self.extractor.as_ref(), &submission.content)
    }

    fn score_pair(
        &self,
        submissions: &[Submission],
        fingerprints: &[Fingerprint],
        (i, j): (usize, usize),
        threshold: f64,
    ) -> Option<SimilarityMatch> {
        let raw = self.scorer.score(&fingerprints[i], &fingerprints[j]);
        let final_percent = raw.final_percent();

        if final_percent < threshold {
            return None;
        }

        Some(SimilarityMatch {
            student_1: submissions[i].identifier().to_string(),
            student_2: submissions[j].identifier().to_string(),
            similarity_percent: final_percent,
            ast_similarity: round_to(raw.structural_percent, 2),
            token_similarity: round_to(raw.token_percent, 2),
        })
    }

    fn run(&self, submissions: &[Submission], threshold: f64) -> (Vec<SimilarityMatch>, Vec<String>, usize) {
        let fingerprinted: Vec<(Fingerprint, bool)> = match self.pool {
            Some(_) => submissions.par_iter().map(|s| self.fingerprint(s)).collect(),
            None => submissions.iter().map(|s| self.fingerprint(s)).collect(),
        };

        let unparseable: Vec<String> = fingerprinted
            .iter()
            .zip(submissions)
            .filter(|((_, parsed), _)| !parsed)
            .map(|(_, s)| s.identifier().to_string())
            .collect();
        let fingerprints: Vec<Fingerprint> = fingerprinted.into_iter().map(|(fp, _)| fp).collect();

        let n = submissions.len();
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect();

        let scored: Vec<Option<SimilarityMatch>> = match self.pool {
            Some(_) => pairs
                .par_iter()
                .map(|&pair| self.score_pair(submissions, &fingerprints, pair, threshold))
                .collect(),
            None => pairs
                .iter()
                .map(|&pair| self.score_pair(submissions, &fingerprints, pair, threshold))
                .collect(),
        };

        (scored.into_iter().flatten().collect(), unparseable, pairs.len())
    }
}

impl CompareBatchUseCase for CompareBatchUseCaseImpl {
    fn compare_batch(&self, input: CompareBatchInput) -> BatchReport {
        let start = Instant::now();
        let threshold = input.threshold.unwrap_or(self.default_threshold);

        info!(
            "Comparing {} submissions (threshold {:.2})",
            input.submissions.len(),
            threshold
        );

        let (matches, unparseable, pairs_compared) = match &self.pool {
            Some(pool) => pool.install(|| self.run(input.submissions, threshold)),
            None => self.run(input.submissions, threshold),
        };

        let leaderboard = build_leaderboard(&matches);
        let elapsed = start.elapsed();

        info!(
            "Batch done: {} pairs, {} matches, {} unparseable, {}ms",
            pairs_compared,
            matches.len(),
            unparseable.len(),
            elapsed.as_millis()
        );

        BatchReport {
            stats: BatchStats {
                total_submissions: input.submissions.len(),
                pairs_compared,
                matches_found: matches.len(),
                unparseable,
                threshold,
                execution_time_ms: elapsed.as_millis() as u64,
            },
            matches,
            leaderboard,
        }
    }
}
