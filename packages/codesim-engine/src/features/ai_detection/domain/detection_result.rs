//! Classifier output normalization

use ahash::AHashSet;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Error marker for inputs with no code left after comment stripping
pub const EMPTY_INPUT_ERROR: &str = "Empty code provided";

/// Labels (uppercased) that mean "machine generated"
static AI_LABELS: Lazy<AHashSet<&'static str>> = Lazy::new(|| {
    [
        "LABEL_1",
        "AI",
        "AI_GENERATED",
        "AI-GENERATED",
        "GENERATED",
        "MACHINE",
        "MACHINE_GENERATED",
        "FAKE",
    ]
    .into_iter()
    .collect()
});

/// Raw classifier output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,

    /// Confidence of `label`, in `[0, 1]`
    pub score: f64,
}

impl Classification {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// AI/human likelihood of one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiDetectionResult {
    pub ai_prob: f64,
    pub human_prob: f64,
    pub is_ai_generated: bool,

    /// `max(ai_prob, human_prob)`; zero when `error` is set
    pub confidence: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AiDetectionResult {
    /// Zero-confidence result carrying an error marker
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            ai_prob: 0.0,
            human_prob: 0.0,
            is_ai_generated: false,
            confidence: 0.0,
            error: Some(error.into()),
        }
    }

    pub fn empty_input() -> Self {
        Self::failed(EMPTY_INPUT_ERROR)
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Whether a classifier label names the AI class
pub fn is_ai_label(label: &str) -> bool {
    AI_LABELS.contains(label.trim().to_ascii_uppercase().as_str())
}

/// Turn a label + score into the symmetric probability pair
///
/// The score is attributed to the AI side when the label is an AI label and
/// to the human side otherwise.
pub fn normalize(classification: &Classification) -> AiDetectionResult {
    let score = classification.score;
    let (ai_prob, human_prob) = if is_ai_label(&classification.label) {
        (score, 1.0 - score)
    } else {
        (1.0 - score, score)
    };

    AiDetectionResult {
        ai_prob,
        human_prob,
        is_ai_generated: ai_prob >= human_prob,
        confidence: ai_prob.max(human_prob),
        error: None,
    }
}
