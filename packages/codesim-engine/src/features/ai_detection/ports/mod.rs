//! AI detection ports

mod text_classifier;

pub use text_classifier::{ClassifierError, TextClassifier};
