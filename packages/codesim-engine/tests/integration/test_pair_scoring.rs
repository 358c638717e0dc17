//! Pairwise scoring through the engine façade

#[path = "../common/mod.rs"]
mod common;
use common::*;

use codesim_engine::features::similarity::round_to;
use codesim_engine::{CodesimEngine, EngineConfig, LanguageId};
use pretty_assertions::assert_eq;

fn python_engine() -> CodesimEngine {
    CodesimEngine::new(EngineConfig::default()).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// Scores
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn identical_fifty_line_files_score_100() {
    let source = fifty_line_python();
    assert_eq!(source.lines().count(), 50);

    let result = python_engine().score_pair(&source, &source);
    assert_eq!(result.ast_similarity, 100.0);
    assert_eq!(result.token_similarity, 100.0);
    assert_eq!(result.final_similarity, 100.0);
    assert!(result.copied_sections.is_none());
}

#[test]
fn whitespace_changes_do_not_matter() {
    let result = python_engine().score_pair("x = 1\ny = x  +  2\n", "x=1\ny=x+2\n");
    assert_eq!(result.final_similarity, 100.0);
}

#[test]
fn renamed_identifiers_keep_structure() {
    let result = python_engine().score_pair(ORIGINAL, RENAMED);

    assert_eq!(result.ast_similarity, 100.0);
    assert!(result.token_similarity < 100.0);
    assert!(result.final_similarity > 50.0);
}

#[test]
fn syntax_error_scores_on_tokens_only() {
    let result = python_engine().score_pair(SYNTAX_ERROR, ORIGINAL);

    assert_eq!(result.ast_similarity, 0.0);
    assert!((result.final_similarity - result.token_similarity / 2.0).abs() <= 0.01);
}

#[test]
fn operator_changes_lower_structural_score() {
    let engine = python_engine();
    let result = engine.score_pair(
        "x = a + b\nif x < 3 and y:\n    x += 1\n",
        "x = a * b\nif x >= 3 or y:\n    x -= 1\n",
    );

    assert!(result.ast_similarity < 100.0);
    assert!(engine.score_pair("x = a + b\n", "x = a * b\n").ast_similarity < 100.0);
}

#[test]
fn python2_print_statement_is_unparseable() {
    let result = python_engine().score_pair("print \"hi\"\n", "x = 1\n");
    assert_eq!(result.ast_similarity, 0.0);
}

#[test]
fn empty_inputs_are_identical() {
    let result = python_engine().score_pair("", "");
    assert_eq!(result.final_similarity, 100.0);
}

#[test]
fn scores_are_symmetric() {
    let engine = python_engine();
    for (a, b) in [(ORIGINAL, RENAMED), (ORIGINAL, TRIVIAL), (SYNTAX_ERROR, RENAMED)] {
        assert_eq!(engine.score_pair(a, b), engine.score_pair(b, a));
    }
}

#[test]
fn final_is_rounded_blend() {
    let result = python_engine().score_pair(ORIGINAL, TRIVIAL);
    let blended = round_to((result.ast_similarity + result.token_similarity) / 2.0, 2);

    assert!((result.final_similarity - blended).abs() <= 0.011);
    assert!(result.final_similarity < 50.0);
}

#[test]
fn java_engine_scores_java() {
    let engine = CodesimEngine::new(EngineConfig::default().language(LanguageId::Java)).unwrap();
    let renamed = JAVA_ORIGINAL.replace("count", "hits");

    assert_eq!(engine.score_pair(JAVA_ORIGINAL, JAVA_ORIGINAL).final_similarity, 100.0);

    let result = engine.score_pair(JAVA_ORIGINAL, &renamed);
    assert_eq!(result.ast_similarity, 100.0);
    assert!(result.token_similarity < 100.0);
}

// ═══════════════════════════════════════════════════════════════════════════
// Copied spans
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn copied_span_is_taken_from_first_text() {
    let engine = CodesimEngine::new(EngineConfig::default().autojunk(false)).unwrap();
    let a = format!("# a\n{}", ORIGINAL);
    let b = format!("# borrowed from a classmate\n{}", ORIGINAL);

    let result = engine.score_pair_with_spans(&a, &b, None).unwrap();
    let sections = result.copied_sections.unwrap();

    assert_eq!(sections.len(), 1);
    assert!(sections[0].contains(ORIGINAL));
    assert!(a.contains(&sections[0]));
}

#[test]
fn every_span_exceeds_minimum() {
    let engine = python_engine();
    let result = engine.score_pair_with_spans(ORIGINAL, RENAMED, Some(5)).unwrap();

    for section in result.copied_sections.unwrap() {
        assert!(section.chars().count() > 5, "span too short: {:?}", section);
        assert!(ORIGINAL.contains(&section));
    }
}

#[test]
fn huge_minimum_yields_no_spans() {
    let result = python_engine()
        .score_pair_with_spans(ORIGINAL, ORIGINAL, Some(10_000))
        .unwrap();
    assert_eq!(result.copied_sections, Some(Vec::new()));
}

#[test]
fn spans_do_not_change_scores() {
    let engine = python_engine();
    let plain = engine.score_pair(ORIGINAL, RENAMED);
    let with_spans = engine.score_pair_with_spans(ORIGINAL, RENAMED, None).unwrap();

    assert_eq!(plain.final_similarity, with_spans.final_similarity);
    assert_eq!(plain.ast_similarity, with_spans.ast_similarity);
}

#[test]
fn zero_minimum_is_rejected() {
    assert!(python_engine().score_pair_with_spans(ORIGINAL, RENAMED, Some(0)).is_err());
}
