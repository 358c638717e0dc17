//! Parsing Feature
//!
//! Turns raw source text into the two comparable views used by the scorer:
//! the structural label sequence (node kinds of the parsed tree) and the
//! whitespace-free token stream.
//!
//! ## Structure
//! - `domain/` - StructuralSequence, TokenStream, ParseFailure
//! - `ports/` - StructuralExtractor trait, LanguageId
//! - `infrastructure/` - TreeSitterExtractor, ExtractorRegistry

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::{ParseFailure, StructuralSequence, TokenStream};
pub use infrastructure::{ExtractorRegistry, TreeSitterExtractor};
pub use ports::{extract_or_empty, extract_with_status, LanguageId, StructuralExtractor};
