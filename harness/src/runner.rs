//! Harness runner: decode a puzzle, dispatch the configured strategy, and
//! collect the outcome with its diagnostics.
//!
//! # Pipeline
//!
//! ```text
//! decode_puzzle() → policy.validate() → WriggleWorld
//!   → bfts | id_dfts | grbefgs | a_star_gs   (timed)
//!   → effective_branching_factor()           (A* only)
//!   → SolveReport
//! ```
//!
//! The runner does not implement any search logic itself.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use wriggle_kernel::carrier::board::Board;
use wriggle_kernel::carrier::decode::{decode_puzzle, DecodeError};
use wriggle_kernel::carrier::state::WriggleState;
use wriggle_kernel::operators::action::WriggleAction;

use wriggle_search::error::SearchError;
use wriggle_search::policy::{SearchPolicyV1, StrategyV1};
use wriggle_search::result::{DepthLimitedResult, GenericResult, Solution};
use wriggle_search::search::{a_star_gs, bfts, grbefgs, id_dfts};

use crate::branching::effective_branching_factor;
use crate::worlds::wriggle::WriggleWorld;

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The puzzle text did not decode.
    Decode(DecodeError),
    /// Policy validation failed, or the world rejected one of its own moves.
    Search(SearchError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "puzzle decode failed: {e}"),
            Self::Search(e) => write!(f, "search failed: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
            Self::Search(e) => Some(e),
        }
    }
}

impl From<DecodeError> for RunError {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// How a run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeV1 {
    Solved,
    /// Every reachable state was exhausted.
    Failure,
    /// ID-DFTS hit its depth bound while paths were still being cut off.
    Cutoff,
}

impl OutcomeV1 {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Solved => "solved",
            Self::Failure => "failure",
            Self::Cutoff => "cutoff",
        }
    }
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// The policy the run used, after validation.
    pub policy: SearchPolicyV1,
    pub outcome: OutcomeV1,
    /// Present exactly when `outcome` is `Solved`.
    pub solution: Option<Solution<WriggleState, WriggleAction>>,
    /// Children generated (A* only).
    pub expanded_nodes: Option<u64>,
    /// Solution depth as A* records it (A* only).
    pub max_depth: Option<u32>,
    /// Effective branching factor (A* only, when a root above 1 exists).
    pub branching_factor: Option<f64>,
    /// Wall-clock time spent inside the strategy.
    pub elapsed: Duration,
}

impl SolveReport {
    /// Number of actions in the solution, if any.
    #[must_use]
    pub fn action_count(&self) -> Option<usize> {
        self.solution.as_ref().map(Solution::len)
    }
}

/// A decoded puzzle together with the report of solving it.
#[derive(Debug, Clone)]
pub struct PuzzleRun {
    pub board: Board,
    pub initial_state: WriggleState,
    pub report: SolveReport,
}

/// Run the strategy selected by `policy` on `board` from `initial_state`.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the policy is invalid or the world rejects
/// one of its own moves. Failure to find a solution is not an error.
pub fn run_search(
    board: &Board,
    initial_state: WriggleState,
    policy: &SearchPolicyV1,
) -> Result<SolveReport, RunError> {
    policy.validate()?;
    let world = WriggleWorld::new(board.clone());

    let started = Instant::now();
    let mut report = match policy.strategy {
        StrategyV1::Bfts => from_generic(policy, bfts(&world, initial_state)?),
        StrategyV1::GrBeFgs => {
            from_generic(policy, grbefgs(&world, initial_state, &policy.heuristic)?)
        }
        StrategyV1::IdDfts => from_depth_limited(
            policy,
            id_dfts(&world, initial_state, policy.max_depth)?,
        ),
        StrategyV1::AStar => {
            let result = a_star_gs(&world, initial_state, &policy.heuristic)?;
            let solved = !result.is_failure();
            let mut report = from_generic(policy, result.outcome);
            report.expanded_nodes = Some(result.expanded_nodes);
            if solved {
                report.max_depth = Some(result.max_depth);
                report.branching_factor =
                    effective_branching_factor(result.expanded_nodes, result.max_depth);
            }
            report
        }
    };
    report.elapsed = started.elapsed();

    match report.outcome {
        OutcomeV1::Solved => info!(
            strategy = policy.strategy.name(),
            actions = report.action_count(),
            elapsed_us = u64::try_from(report.elapsed.as_micros()).unwrap_or(u64::MAX),
            "puzzle solved"
        ),
        OutcomeV1::Failure | OutcomeV1::Cutoff => warn!(
            strategy = policy.strategy.name(),
            outcome = report.outcome.name(),
            "no solution found"
        ),
    }
    Ok(report)
}

/// Decode `text` and solve it under `policy`.
///
/// # Errors
///
/// Returns [`RunError::Decode`] for malformed puzzle text, otherwise as
/// [`run_search`].
pub fn solve_puzzle_text(text: &str, policy: &SearchPolicyV1) -> Result<PuzzleRun, RunError> {
    let puzzle = decode_puzzle(text)?;
    let report = run_search(&puzzle.board, puzzle.initial_state.clone(), policy)?;
    Ok(PuzzleRun {
        board: puzzle.board,
        initial_state: puzzle.initial_state,
        report,
    })
}

fn empty_report(policy: &SearchPolicyV1, outcome: OutcomeV1) -> SolveReport {
    SolveReport {
        policy: *policy,
        outcome,
        solution: None,
        expanded_nodes: None,
        max_depth: None,
        branching_factor: None,
        elapsed: Duration::ZERO,
    }
}

fn from_generic(
    policy: &SearchPolicyV1,
    result: GenericResult<WriggleState, WriggleAction>,
) -> SolveReport {
    match result.into_solution() {
        Some(solution) => SolveReport {
            solution: Some(solution),
            ..empty_report(policy, OutcomeV1::Solved)
        },
        None => empty_report(policy, OutcomeV1::Failure),
    }
}

fn from_depth_limited(
    policy: &SearchPolicyV1,
    result: DepthLimitedResult<WriggleState, WriggleAction>,
) -> SolveReport {
    match result {
        DepthLimitedResult::Solved(solution) => SolveReport {
            solution: Some(solution),
            ..empty_report(policy, OutcomeV1::Solved)
        },
        DepthLimitedResult::Cutoff => empty_report(policy, OutcomeV1::Cutoff),
        DepthLimitedResult::Failure => empty_report(policy, OutcomeV1::Failure),
    }
}
