//! Run artifacts: the solution file and the JSON report.
//!
//! # Solution file
//!
//! ```text
//! <wriggler> <end> <col> <row>     one line per action, end 0 = head, 1 = tail
//! ...
//! <rendered final board>           one line per row
//! <wall time in seconds>
//! <action count>                   no trailing newline
//! ```
//!
//! # Report
//!
//! Compact JSON with keys in sorted order (`serde_json`'s default map is a
//! `BTreeMap`). Digests use the kernel's domain-separated `canonical_hash`:
//! the puzzle text under `DOMAIN_PUZZLE`, the solution file under
//! `DOMAIN_SOLUTION`. The digest of the report bytes themselves is
//! [`report_digest`].

use std::path::Path;
use std::time::Duration;

use serde_json::json;

use wriggle_kernel::carrier::board::Board;
use wriggle_kernel::carrier::render::render;
use wriggle_kernel::carrier::state::WriggleState;
use wriggle_kernel::operators::action::WriggleAction;
use wriggle_kernel::proof::hash::{
    canonical_hash, ContentHash, DOMAIN_PUZZLE, DOMAIN_REPORT, DOMAIN_SOLUTION,
};
use wriggle_search::result::Solution;

use crate::branching::format_branching_factor;
use crate::runner::SolveReport;

/// Report schema identifier, bumped on any field change.
pub const REPORT_SCHEMA_VERSION: &str = "wriggle.report.v1";

/// Error producing or writing an artifact.
#[derive(Debug)]
pub enum BundleError {
    /// I/O error during write.
    Io { detail: String },
    /// JSON serialization failed.
    Serialize { detail: String },
}

impl std::fmt::Display for BundleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::Serialize { detail } => write!(f, "report serialization error: {detail}"),
        }
    }
}

impl std::error::Error for BundleError {}

/// Render the solution file for `solution` on `board`.
#[must_use]
pub fn solution_file_text(
    board: &Board,
    solution: &Solution<WriggleState, WriggleAction>,
    elapsed: Duration,
) -> String {
    let mut text = String::new();
    for action in solution.actions() {
        text.push_str(&action.solution_line());
        text.push('\n');
    }
    text.push_str(&render(board, solution.final_state()));
    text.push('\n');
    text.push_str(&elapsed.as_secs_f64().to_string());
    text.push('\n');
    text.push_str(&solution.len().to_string());
    text
}

/// Write the solution file to `path`, returning the text written.
///
/// # Errors
///
/// Returns [`BundleError::Io`] if the file cannot be written.
pub fn write_solution_file(
    path: &Path,
    board: &Board,
    solution: &Solution<WriggleState, WriggleAction>,
    elapsed: Duration,
) -> Result<String, BundleError> {
    let text = solution_file_text(board, solution, elapsed);
    std::fs::write(path, &text).map_err(|e| BundleError::Io {
        detail: format!("{}: {e}", path.display()),
    })?;
    Ok(text)
}

/// Build the JSON report for a run.
///
/// `solution_text` is the solution file content, if one was produced.
///
/// # Errors
///
/// Returns [`BundleError::Serialize`] if JSON serialization fails.
pub fn report_json(
    puzzle_text: &str,
    report: &SolveReport,
    solution_text: Option<&str>,
) -> Result<Vec<u8>, BundleError> {
    let puzzle_digest = canonical_hash(DOMAIN_PUZZLE, puzzle_text.as_bytes());
    let solution_digest =
        solution_text.map(|text| canonical_hash(DOMAIN_SOLUTION, text.as_bytes()).to_string());
    let value = json!({
        "schema_version": REPORT_SCHEMA_VERSION,
        "puzzle_digest": puzzle_digest.as_str(),
        "strategy": report.policy.strategy.name(),
        "heuristic": report.policy.heuristic.name(),
        "max_depth_bound": report.policy.max_depth,
        "outcome": report.outcome.name(),
        "action_count": report.action_count(),
        "expanded_nodes": report.expanded_nodes,
        "max_depth": report.max_depth,
        "branching_factor": report.branching_factor.map(format_branching_factor),
        "elapsed_us": u64::try_from(report.elapsed.as_micros()).unwrap_or(u64::MAX),
        "solution_digest": solution_digest,
    });
    serde_json::to_vec(&value).map_err(|e| BundleError::Serialize {
        detail: e.to_string(),
    })
}

/// Digest of serialized report bytes.
#[must_use]
pub fn report_digest(report_bytes: &[u8]) -> ContentHash {
    canonical_hash(DOMAIN_REPORT, report_bytes)
}
