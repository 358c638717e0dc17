//! AI-likelihood detection through the engine

#[path = "../common/mod.rs"]
mod common;
use common::*;

use std::sync::Arc;

use codesim_engine::features::ai_detection::EMPTY_INPUT_ERROR;
use codesim_engine::{CodesimEngine, EngineConfig, LanguageId};

fn engine_with(classifier: Arc<StubClassifier>) -> CodesimEngine {
    CodesimEngine::new(EngineConfig::default())
        .unwrap()
        .with_classifier(classifier)
}

#[test]
fn label_1_is_ai() {
    let result = engine_with(Arc::new(StubClassifier::label("LABEL_1", 0.8)))
        .classify_ai_likelihood(ORIGINAL);

    assert_eq!(result.ai_prob, 0.8);
    assert!((result.human_prob - 0.2).abs() < 1e-12);
    assert!(result.is_ai_generated);
    assert_eq!(result.confidence, 0.8);
    assert!(result.error.is_none());
}

#[test]
fn other_labels_are_human() {
    let result = engine_with(Arc::new(StubClassifier::label("LABEL_0", 0.7)))
        .classify_ai_likelihood(ORIGINAL);

    assert!((result.ai_prob - 0.3).abs() < 1e-12);
    assert_eq!(result.human_prob, 0.7);
    assert!(!result.is_ai_generated);
    assert_eq!(result.confidence, 0.7);
}

#[test]
fn probabilities_sum_to_one() {
    for score in [0.0, 0.25, 0.5, 0.99, 1.0] {
        for label in ["AI", "human"] {
            let result = engine_with(Arc::new(StubClassifier::label(label, score)))
                .classify_ai_likelihood(ORIGINAL);
            assert!((result.ai_prob + result.human_prob - 1.0).abs() < 1e-12);
            assert_eq!(result.is_ai_generated, result.ai_prob >= result.human_prob);
        }
    }
}

#[test]
fn comments_are_stripped_before_classifying() {
    let stub = Arc::new(StubClassifier::label("LABEL_1", 0.6));
    let engine = engine_with(stub.clone());
    let source = "# solution by alice\n\n\ndef f(x):\n    # double it\n    return x * 2\n";

    engine.classify_ai_likelihood(source);

    let calls = stub.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (sent, max_length) = &calls[0];
    assert!(!sent.contains("alice"));
    assert!(!sent.contains("double it"));
    assert!(sent.contains("return x * 2"));
    assert!(sent.lines().all(|line| !line.trim().is_empty()));
    assert_eq!(*max_length, 512);
}

#[test]
fn java_comments_are_stripped() {
    let stub = Arc::new(StubClassifier::label("LABEL_1", 0.6));
    let engine = CodesimEngine::new(
        EngineConfig::default()
            .language(LanguageId::Java)
            .classifier_max_length(256),
    )
    .unwrap()
    .with_classifier(stub.clone());

    engine.classify_ai_likelihood("/* header */\nclass A {\n    // note\n    int x = 1;\n}\n");

    let calls = stub.calls.lock().unwrap();
    assert!(!calls[0].0.contains("header"));
    assert!(!calls[0].0.contains("note"));
    assert!(calls[0].0.contains("int x = 1;"));
    assert_eq!(calls[0].1, 256);
}

#[test]
fn empty_code_is_uncertain_not_an_error() {
    let stub = Arc::new(StubClassifier::label("LABEL_1", 0.9));
    let engine = engine_with(stub.clone());

    for source in ["", "   \n\t\n", "# just a comment\n"] {
        let result = engine.classify_ai_likelihood(source);
        assert_eq!(result.confidence, 0.0);
        assert!(!result.is_ai_generated);
        assert_eq!(result.error.as_deref(), Some(EMPTY_INPUT_ERROR));
    }
    assert_eq!(stub.call_count(), 0);
}

#[test]
fn classifier_failure_is_reported_inline() {
    let result = engine_with(Arc::new(StubClassifier::failing("CUDA out of memory")))
        .classify_ai_likelihood(ORIGINAL);

    assert_eq!(result.confidence, 0.0);
    assert!(!result.is_ai_generated);
    assert!(result.error.unwrap().contains("CUDA out of memory"));
}

#[test]
fn result_serializes_error_only_when_present() {
    let ok = engine_with(Arc::new(StubClassifier::label("AI", 0.9))).classify_ai_likelihood(ORIGINAL);
    let ok_json = serde_json::to_value(&ok).unwrap();
    assert!(ok_json.get("error").is_none());
    assert_eq!(ok_json["is_ai_generated"], true);

    let failed = engine_with(Arc::new(StubClassifier::failing("boom"))).classify_ai_likelihood(ORIGINAL);
    let failed_json = serde_json::to_value(&failed).unwrap();
    assert!(failed_json["error"].as_str().unwrap().contains("boom"));
}
