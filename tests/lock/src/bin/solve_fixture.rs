//! Binary that solves the lock fixtures with every strategy and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `solve_fixture`
//!
//! Output: one `key=value` line per fixture and strategy. Timing is omitted.

use lock_tests::{CORRIDOR, CROSSING, HOOK};
use wriggle_harness::bundle::solution_file_text;
use wriggle_harness::runner::solve_puzzle_text;
use wriggle_kernel::proof::hash::{canonical_hash, DOMAIN_SOLUTION};
use wriggle_search::heuristic::HeuristicKind;
use wriggle_search::policy::{SearchPolicyV1, StrategyV1};

fn main() {
    for (name, text) in [("corridor", CORRIDOR), ("hook", HOOK), ("crossing", CROSSING)] {
        for strategy in StrategyV1::ALL {
            for heuristic in HeuristicKind::ALL {
                if !strategy.is_informed() && heuristic != HeuristicKind::ManhattanDistance {
                    continue;
                }
                let policy = SearchPolicyV1 {
                    strategy,
                    heuristic,
                    ..SearchPolicyV1::default()
                };
                let run = solve_puzzle_text(text, &policy).expect("fixture run failed");
                let report = &run.report;
                let digest = report.solution.as_ref().map_or_else(
                    || "none".to_string(),
                    |solution| {
                        let text = solution_file_text(&run.board, solution, std::time::Duration::ZERO);
                        canonical_hash(DOMAIN_SOLUTION, text.as_bytes()).to_string()
                    },
                );
                let moves = report.solution.as_ref().map_or_else(String::new, |solution| {
                    solution
                        .actions()
                        .iter()
                        .map(|a| a.solution_line().replace(' ', ","))
                        .collect::<Vec<_>>()
                        .join(";")
                });
                println!(
                    "{name}.{strategy}.{heuristic}: outcome={} actions={} expanded={:?} max_depth={:?} moves={moves} digest={digest}",
                    report.outcome.name(),
                    report.action_count().unwrap_or(0),
                    report.expanded_nodes,
                    report.max_depth,
                );
            }
        }
    }
}
