//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains (where it needs them):
//! - domain/     - Pure business logic (no external dependencies)
//! - ports/      - Interface definitions (traits)
//! - application/ - Use cases
//! - infrastructure/ - External dependency implementations

pub mod parsing;
pub mod similarity;

// Pairwise results aggregated over a whole submission set
pub mod batch;

// Classifier output normalization (model is injected, never owned)
pub mod ai_detection;

pub mod submission_store;
