//! Parsing ports

mod language;
mod structural_extractor;

pub use language::LanguageId;
pub use structural_extractor::{extract_or_empty, extract_with_status, StructuralExtractor};
