//! End-to-end lock tests: puzzle text in, solution file and report out.

use std::time::Duration;

use lock_tests::{CORRIDOR, CROSSING, HOOK, STUCK, WALLED_GOAL};
use wriggle_harness::bundle::{report_json, solution_file_text, write_solution_file};
use wriggle_harness::runner::{solve_puzzle_text, OutcomeV1, RunError};
use wriggle_kernel::carrier::decode::{decode_puzzle, DecodeError};
use wriggle_kernel::carrier::render::render_puzzle;
use wriggle_kernel::proof::hash::{canonical_hash, DOMAIN_PUZZLE};
use wriggle_search::heuristic::HeuristicKind;
use wriggle_search::policy::{SearchPolicyV1, StrategyV1};

fn policy(strategy: StrategyV1, heuristic: HeuristicKind) -> SearchPolicyV1 {
    SearchPolicyV1 {
        strategy,
        heuristic,
        ..SearchPolicyV1::default()
    }
}

#[test]
fn fixtures_round_trip_through_render() {
    for text in [CORRIDOR, CROSSING, HOOK, STUCK, WALLED_GOAL] {
        let puzzle = decode_puzzle(text).unwrap();
        assert_eq!(render_puzzle(&puzzle.board, &puzzle.initial_state), text);
    }
}

#[test]
fn crossing_solution_file_is_well_formed() {
    let run = solve_puzzle_text(CROSSING, &policy(StrategyV1::Bfts, HeuristicKind::default()))
        .unwrap();
    let solution = run.report.solution.as_ref().unwrap();
    let text = solution_file_text(&run.board, solution, Duration::from_millis(250));
    let lines: Vec<&str> = text.lines().collect();

    // 5 moves, 3 board rows, time, count.
    assert_eq!(lines.len(), 5 + 3 + 2);
    for line in &lines[..5] {
        let fields: Vec<u32> = line.split(' ').map(|f| f.parse().unwrap()).collect();
        assert_eq!(fields.len(), 4, "{line}");
        assert!(fields[1] <= 1, "{line}");
    }
    assert_eq!(lines[8], "0.25");
    assert_eq!(lines[9], "5");
    assert!(!text.ends_with('\n'));

    // The rendered final board decodes back to the solution's final state.
    let board_text = format!("4 3 2\n{}\n", lines[5..8].join("\n"));
    let final_puzzle = decode_puzzle(&board_text).unwrap();
    assert_eq!(&final_puzzle.initial_state, solution.final_state());
}

#[test]
fn solution_and_report_files_written_together() {
    let dir = tempfile::tempdir().unwrap();
    let solution_path = dir.path().join("solution.txt");
    let report_path = dir.path().join("report.json");

    let run = solve_puzzle_text(HOOK, &policy(StrategyV1::AStar, HeuristicKind::ObstacleCount))
        .unwrap();
    let solution = run.report.solution.as_ref().unwrap();
    let written =
        write_solution_file(&solution_path, &run.board, solution, run.report.elapsed).unwrap();
    let bytes = report_json(HOOK, &run.report, Some(&written)).unwrap();
    std::fs::write(&report_path, &bytes).unwrap();

    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(on_disk["heuristic"], "obstacles");
    assert_eq!(on_disk["outcome"], "solved");
    assert_eq!(
        on_disk["puzzle_digest"],
        canonical_hash(DOMAIN_PUZZLE, HOOK.as_bytes()).as_str()
    );
    assert_eq!(std::fs::read_to_string(&solution_path).unwrap(), written);
}

#[test]
fn report_is_deterministic_apart_from_timing() {
    let p = policy(StrategyV1::AStar, HeuristicKind::ManhattanDistance);
    let strip = |bytes: Vec<u8>| {
        let mut value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        value["elapsed_us"] = serde_json::Value::Null;
        value
    };
    let first = solve_puzzle_text(CROSSING, &p).unwrap();
    let second = solve_puzzle_text(CROSSING, &p).unwrap();
    assert_eq!(
        strip(report_json(CROSSING, &first.report, None).unwrap()),
        strip(report_json(CROSSING, &second.report, None).unwrap())
    );
}

#[test]
fn every_policy_agrees_on_crossing_optimum() {
    for strategy in [StrategyV1::Bfts, StrategyV1::IdDfts, StrategyV1::AStar] {
        let run = solve_puzzle_text(CROSSING, &policy(strategy, HeuristicKind::default())).unwrap();
        assert_eq!(run.report.outcome, OutcomeV1::Solved, "{strategy}");
        assert_eq!(run.report.action_count(), Some(5), "{strategy}");
    }
}

#[test]
fn unsolvable_puzzles_report_outcomes() {
    let astar = solve_puzzle_text(WALLED_GOAL, &policy(StrategyV1::AStar, HeuristicKind::default()))
        .unwrap();
    assert_eq!(astar.report.outcome, OutcomeV1::Failure);
    assert_eq!(astar.report.expanded_nodes, Some(2));
    assert_eq!(astar.report.max_depth, None);

    let bounded = SearchPolicyV1 {
        strategy: StrategyV1::IdDfts,
        heuristic: HeuristicKind::default(),
        max_depth: Some(6),
    };
    let idd = solve_puzzle_text(WALLED_GOAL, &bounded).unwrap();
    assert_eq!(idd.report.outcome, OutcomeV1::Cutoff);
}

#[test]
fn malformed_puzzles_fail_with_decode_errors() {
    let cases = [
        ("", "missing header"),
        ("3 1\nR 0 e\n", "short header"),
        ("3 1 1\nR 0\n", "short row"),
        ("3 1 1\nR 0 q\n", "unknown token"),
        ("3 2 1\nR 0 e\n", "missing row"),
    ];
    for (text, label) in cases {
        let err = solve_puzzle_text(text, &SearchPolicyV1::default()).unwrap_err();
        assert!(matches!(err, RunError::Decode(_)), "{label}: {err}");
    }
    assert!(matches!(
        decode_puzzle("3 1 1\nR 0 q\n"),
        Err(DecodeError::UnknownToken { .. })
    ));
}
