//! Shared module - Common types used by every feature
//!
//! Value objects only. Nothing here touches tree-sitter, the filesystem or
//! the classifier.

pub mod models;

// Re-exports for convenience
pub use models::*;
