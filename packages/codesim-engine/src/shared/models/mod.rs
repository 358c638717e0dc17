//! Shared models

mod submission;

pub use submission::{Submission, SubmissionId};
