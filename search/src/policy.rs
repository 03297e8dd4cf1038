//! Search policy types.

use std::str::FromStr;

use crate::error::SearchError;
use crate::heuristic::HeuristicKind;

/// Hard ceiling for the ID-DFTS depth bound. Depth-limited search recurses
/// once per level, so this also bounds stack depth.
pub const MAX_RECURSION_DEPTH: u32 = 10_000;

/// Default ID-DFTS depth bound.
pub const DEFAULT_MAX_DEPTH: u32 = 64;

/// Which search strategy a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyV1 {
    /// Breadth-first tree search.
    Bfts,
    /// Iterative-deepening depth-first tree search.
    IdDfts,
    /// Greedy best-first graph search.
    GrBeFgs,
    /// A* graph search.
    #[default]
    AStar,
}

impl StrategyV1 {
    pub const ALL: [Self; 4] = [Self::Bfts, Self::IdDfts, Self::GrBeFgs, Self::AStar];

    /// Stable name used on the command line and in reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bfts => "bfts",
            Self::IdDfts => "id-dfts",
            Self::GrBeFgs => "grbefgs",
            Self::AStar => "astar",
        }
    }

    /// Whether the strategy reads the heuristic.
    #[must_use]
    pub fn is_informed(self) -> bool {
        matches!(self, Self::GrBeFgs | Self::AStar)
    }
}

impl std::fmt::Display for StrategyV1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyV1 {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| SearchError::UnknownStrategy { name: s.to_string() })
    }
}

impl FromStr for HeuristicKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| SearchError::UnknownHeuristic { name: s.to_string() })
    }
}

/// Configuration for one search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    pub strategy: StrategyV1,
    /// Ignored by the uninformed strategies.
    pub heuristic: HeuristicKind,
    /// ID-DFTS depth bound. `None` deepens without limit, which never
    /// terminates on an unsolvable puzzle whose state space has cycles.
    pub max_depth: Option<u32>,
}

impl SearchPolicyV1 {
    /// Validate the policy before a run.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::DepthBoundTooLarge`] if `max_depth` exceeds
    /// [`MAX_RECURSION_DEPTH`].
    pub fn validate(&self) -> Result<(), SearchError> {
        match self.max_depth {
            Some(requested) if requested > MAX_RECURSION_DEPTH => {
                Err(SearchError::DepthBoundTooLarge {
                    requested,
                    ceiling: MAX_RECURSION_DEPTH,
                })
            }
            _ => Ok(()),
        }
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            strategy: StrategyV1::AStar,
            heuristic: HeuristicKind::ManhattanDistance,
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}
