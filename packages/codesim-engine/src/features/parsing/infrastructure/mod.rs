//! Parsing infrastructure
//!
//! This is where the tree-sitter dependency lives.

mod registry;
mod tree_sitter_extractor;

pub use registry::ExtractorRegistry;
pub use tree_sitter_extractor::TreeSitterExtractor;
