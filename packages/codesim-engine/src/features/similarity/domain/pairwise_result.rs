//! Pairwise scores

use serde::{Deserialize, Serialize};

/// Round to `decimals` places (decimal rounding of the exact binary value)
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// Unrounded structural and token percentages of one pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawScore {
    /// Structural-sequence ratio × 100
    pub structural_percent: f64,

    /// Token-stream ratio × 100
    pub token_percent: f64,
}

impl RawScore {
    pub fn new(structural_percent: f64, token_percent: f64) -> Self {
        Self {
            structural_percent,
            token_percent,
        }
    }

    /// `round((structural + token) / 2, 2)`
    pub fn final_percent(&self) -> f64 {
        round_to((self.structural_percent + self.token_percent) / 2.0, 2)
    }

    /// Reported form (sub-scores rounded, no spans)
    pub fn to_result(&self) -> PairwiseResult {
        PairwiseResult {
            ast_similarity: round_to(self.structural_percent, 2),
            token_similarity: round_to(self.token_percent, 2),
            final_similarity: self.final_percent(),
            copied_sections: None,
        }
    }
}

/// Reported similarity of two texts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseResult {
    /// Structural similarity percentage (2 decimals)
    pub ast_similarity: f64,

    /// Token similarity percentage (2 decimals)
    pub token_similarity: f64,

    /// Blended percentage, computed from the unrounded sub-scores
    pub final_similarity: f64,

    /// Copied text spans, when extraction was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copied_sections: Option<Vec<String>>,
}

impl PairwiseResult {
    pub fn with_copied_sections(mut self, sections: Vec<String>) -> Self {
        self.copied_sections = Some(sections);
        self
    }
}
