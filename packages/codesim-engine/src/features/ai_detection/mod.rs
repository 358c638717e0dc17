//! AI-likelihood detection
//!
//! Maps a black-box text classifier's label + score into a symmetric
//! AI/human probability pair and a verdict.
//!
//! ```text
//! source ─▶ strip comments ─▶ TextClassifier ─▶ normalize ─▶ AiDetectionResult
//! ```

pub mod application;
pub mod domain;
pub mod ports;

pub use application::{ClassifyUseCase, ClassifyUseCaseImpl};
pub use domain::{is_ai_label, normalize, AiDetectionResult, Classification, EMPTY_INPUT_ERROR};
pub use ports::{ClassifierError, TextClassifier};
