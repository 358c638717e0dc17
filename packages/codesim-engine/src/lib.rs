/*
 * Codesim Engine - Source-Code Similarity Detection
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Submission, SubmissionId)
 * - features/    : Vertical slices (parsing → similarity → batch, ai_detection, submission_store)
 * - config/      : Engine configuration (YAML, validation)
 * - api/         : CodesimEngine façade
 *
 * Scoring:
 * - Structural ratio over tree-sitter node-kind sequences
 * - Token ratio over whitespace-free character streams
 * - Rayon-parallel batch comparison with deterministic output
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::needless_range_loop)] // Range loop for indexing

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models
pub mod shared;

/// Feature modules (parsing, similarity, batch, ai_detection, submission_store)
pub mod features;

/// Engine configuration
pub mod config;

/// Error types
pub mod errors;

/// Engine façade
pub mod api;

pub use api::{CodesimEngine, StoreComparison};
pub use config::{ConfigError, EngineConfig};
pub use errors::{CodesimError, Result};
pub use features::ai_detection::{AiDetectionResult, Classification, ClassifierError, TextClassifier};
pub use features::batch::{BatchReport, BatchStats, LeaderboardEntry, SimilarityMatch};
pub use features::parsing::{LanguageId, StructuralExtractor};
pub use features::similarity::PairwiseResult;
pub use features::submission_store::{LoadedSubmissions, SkippedFile, SubmissionStore};
pub use shared::{Submission, SubmissionId};
