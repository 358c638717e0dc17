//! AI detection domain models

mod detection_result;

pub use detection_result::{
    is_ai_label, normalize, AiDetectionResult, Classification, EMPTY_INPUT_ERROR,
};
