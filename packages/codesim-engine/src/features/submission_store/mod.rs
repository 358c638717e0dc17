//! Submission store
//!
//! Loads a directory of submission files into [`Submission`] values. Files
//! that cannot be decoded as text are reported, not fatal.
//!
//! [`Submission`]: crate::shared::Submission

pub mod domain;
pub mod infrastructure;

pub use domain::{LoadedSubmissions, SkippedFile};
pub use infrastructure::{decode_text, SubmissionStore};
