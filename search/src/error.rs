//! Typed search errors.
//!
//! `SearchError` covers configuration failures and world contract
//! violations only. Search outcomes (solution, failure, cutoff) are ordinary
//! values in [`crate::result`] and never travel through this type.

/// Typed failure for search configuration and world callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The iterative-deepening bound exceeds the recursion ceiling.
    DepthBoundTooLarge { requested: u32, ceiling: u32 },
    /// A strategy name did not match any known strategy.
    UnknownStrategy { name: String },
    /// A heuristic name did not match any known heuristic.
    UnknownHeuristic { name: String },
    /// `SearchWorld::result` rejected an action it had offered.
    WorldFailure { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DepthBoundTooLarge { requested, ceiling } => {
                write!(f, "depth bound {requested} exceeds recursion ceiling {ceiling}")
            }
            Self::UnknownStrategy { name } => write!(f, "unknown search strategy: {name}"),
            Self::UnknownHeuristic { name } => write!(f, "unknown heuristic: {name}"),
            Self::WorldFailure { detail } => write!(f, "world contract violation: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
