//! Parsing domain models

mod parse_failure;
mod structural_sequence;
mod token_stream;

pub use parse_failure::ParseFailure;
pub use structural_sequence::StructuralSequence;
pub use token_stream::TokenStream;
