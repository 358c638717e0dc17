//! Batch comparison and leaderboard tests

#[path = "../common/mod.rs"]
mod common;
use common::*;

use codesim_engine::{CodesimEngine, CodesimError, EngineConfig, LeaderboardEntry};
use pretty_assertions::assert_eq;

fn engine(parallel: bool) -> CodesimEngine {
    CodesimEngine::new(EngineConfig::default().parallel(parallel).worker_threads(4)).unwrap()
}

fn entry(student: &str, sim_count: usize) -> LeaderboardEntry {
    LeaderboardEntry {
        student: student.to_string(),
        sim_count,
    }
}

#[test]
fn only_the_similar_pair_matches() {
    let subs = submissions(&[("A", ORIGINAL), ("B", RENAMED), ("C", TRIVIAL)]);
    let report = engine(false).compare_batch(&subs, Some(50.0)).unwrap();

    assert_eq!(report.matches.len(), 1);
    let m = &report.matches[0];
    assert_eq!((m.student_1.as_str(), m.student_2.as_str()), ("A", "B"));
    assert!(m.similarity_percent >= 50.0);

    assert_eq!(report.leaderboard, vec![entry("A", 1), entry("B", 1)]);
    assert_eq!(report.stats.pairs_compared, 3);
    assert_eq!(report.stats.matches_found, 1);
    assert_eq!(report.stats.total_submissions, 3);
}

#[test]
fn identical_files_count_once_each() {
    let source = fifty_line_python();
    let subs = submissions(&[
        ("alice_1_main.py", source.as_str()),
        ("bob_2_main.py", source.as_str()),
    ]);
    let report = engine(false).compare_batch(&subs, None).unwrap();

    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].similarity_percent, 100.0);
    assert_eq!(
        report.leaderboard,
        vec![entry("alice_1_main.py", 1), entry("bob_2_main.py", 1)]
    );
}

#[test]
fn hub_submission_leads() {
    // B is a copy of A; D and E are copies of B with small edits
    let d = RENAMED.replace("print", "show");
    let e = RENAMED.replace("[1, 2, 3]", "[4, 5, 6]");
    let subs = submissions(&[
        ("A", ORIGINAL),
        ("B", RENAMED),
        ("C", TRIVIAL),
        ("D", d.as_str()),
        ("E", e.as_str()),
    ]);
    let report = engine(false).compare_batch(&subs, Some(50.0)).unwrap();

    assert!(report.leaderboard.iter().all(|e| e.student != "C"));
    for pair in report.leaderboard.windows(2) {
        assert!(pair[0].sim_count >= pair[1].sim_count);
    }

    let total: usize = report.leaderboard.iter().map(|e| e.sim_count).sum();
    assert_eq!(total, 2 * report.matches.len());
}

#[test]
fn threshold_is_inclusive_and_filters() {
    let subs = submissions(&[("A", ORIGINAL), ("B", RENAMED), ("C", TRIVIAL)]);

    let all = engine(false).compare_batch(&subs, Some(0.0)).unwrap();
    assert_eq!(all.matches.len(), 3);

    let none = engine(false).compare_batch(&subs, Some(100.0)).unwrap();
    assert!(none.matches.is_empty());
    assert!(none.leaderboard.is_empty());

    let exact = all.matches[0].similarity_percent;
    let at = engine(false).compare_batch(&subs, Some(exact)).unwrap();
    assert!(at.matches.iter().any(|m| m.similarity_percent == exact));
}

#[test]
fn matches_follow_pair_order() {
    let subs = submissions(&[("A", ORIGINAL), ("B", RENAMED), ("C", TRIVIAL)]);
    let report = engine(false).compare_batch(&subs, Some(0.0)).unwrap();

    let order: Vec<(&str, &str)> = report
        .matches
        .iter()
        .map(|m| (m.student_1.as_str(), m.student_2.as_str()))
        .collect();
    assert_eq!(order, vec![("A", "B"), ("A", "C"), ("B", "C")]);
}

#[test]
fn unparseable_submission_still_compared() {
    let subs = submissions(&[("ok", ORIGINAL), ("broken", SYNTAX_ERROR)]);
    let report = engine(false).compare_batch(&subs, Some(0.0)).unwrap();

    assert_eq!(report.stats.unparseable, vec!["broken".to_string()]);
    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].ast_similarity, 0.0);
}

#[test]
fn parallel_run_is_deterministic() {
    let mut items: Vec<(String, String)> = Vec::new();
    for i in 0..12 {
        let body = match i % 3 {
            0 => ORIGINAL.to_string(),
            1 => RENAMED.to_string(),
            _ => format!("value_{i} = {i}\n"),
        };
        items.push((format!("s{i:02}"), body));
    }
    let borrowed: Vec<(&str, &str)> = items.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect();
    let subs = submissions(&borrowed);

    let sequential = engine(false).compare_batch(&subs, Some(50.0)).unwrap();
    let parallel = engine(true).compare_batch(&subs, Some(50.0)).unwrap();

    assert_eq!(sequential.matches, parallel.matches);
    assert_eq!(sequential.leaderboard, parallel.leaderboard);
    assert_eq!(sequential.stats.pairs_compared, 66);
}

#[test]
fn report_serializes_with_reference_keys() {
    let subs = submissions(&[("A", ORIGINAL), ("B", RENAMED)]);
    let report = engine(false).compare_batch(&subs, Some(50.0)).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["matches"][0]["student_1"], "A");
    assert_eq!(json["matches"][0]["student_2"], "B");
    assert!(json["matches"][0]["similarity_percent"].is_number());
    assert_eq!(json["leaderboard"][0]["student"], "A");
    assert_eq!(json["leaderboard"][0]["sim_count"], 1);
}

#[test]
fn invalid_threshold_rejected() {
    let subs = submissions(&[("A", ORIGINAL)]);
    assert!(engine(false).compare_batch(&subs, Some(100.5)).is_err());
}

#[test]
fn duplicate_identifiers_rejected() {
    let subs = submissions(&[("A", ORIGINAL), ("A", ORIGINAL)]);
    let err = engine(false).compare_batch(&subs, Some(50.0)).unwrap_err();
    assert!(matches!(err, CodesimError::Submission(_)));
}
