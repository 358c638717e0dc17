//! Submission store infrastructure

mod decode;
mod directory_store;

pub use decode::decode_text;
pub use directory_store::SubmissionStore;
