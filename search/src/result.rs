//! Search outcomes.
//!
//! Every strategy reports its terminal outcome as a value. Failure and
//! cutoff are not errors.

/// A goal state together with the actions that reach it from the initial
/// state. An empty action list means the initial state was already a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<S, A> {
    final_state: S,
    actions: Vec<A>,
}

impl<S, A> Solution<S, A> {
    #[must_use]
    pub fn new(final_state: S, actions: Vec<A>) -> Self {
        Self {
            final_state,
            actions,
        }
    }

    #[must_use]
    pub fn final_state(&self) -> &S {
        &self.final_state
    }

    #[must_use]
    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    /// Number of actions on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// True when the initial state was already a goal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    #[must_use]
    pub fn into_parts(self) -> (S, Vec<A>) {
        (self.final_state, self.actions)
    }
}

/// Outcome of BFTS and GrBeFGS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenericResult<S, A> {
    Solved(Solution<S, A>),
    /// The frontier emptied without reaching a goal.
    Failure,
}

impl<S, A> GenericResult<S, A> {
    #[must_use]
    pub fn solution(&self) -> Option<&Solution<S, A>> {
        match self {
            Self::Solved(solution) => Some(solution),
            Self::Failure => None,
        }
    }

    #[must_use]
    pub fn into_solution(self) -> Option<Solution<S, A>> {
        match self {
            Self::Solved(solution) => Some(solution),
            Self::Failure => None,
        }
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure)
    }
}

/// Outcome of depth-limited search and ID-DFTS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepthLimitedResult<S, A> {
    Solved(Solution<S, A>),
    /// Some path was truncated by the depth limit. Not a failure: a deeper
    /// limit may still find a solution.
    Cutoff,
    /// Every path within the limit was exhausted.
    Failure,
}

impl<S, A> DepthLimitedResult<S, A> {
    #[must_use]
    pub fn solution(&self) -> Option<&Solution<S, A>> {
        match self {
            Self::Solved(solution) => Some(solution),
            Self::Cutoff | Self::Failure => None,
        }
    }

    #[must_use]
    pub fn into_solution(self) -> Option<Solution<S, A>> {
        match self {
            Self::Solved(solution) => Some(solution),
            Self::Cutoff | Self::Failure => None,
        }
    }

    #[must_use]
    pub fn is_cutoff(&self) -> bool {
        matches!(self, Self::Cutoff)
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure)
    }
}

/// Outcome of A*GS plus the diagnostics used for the effective branching
/// factor estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AStarResult<S, A> {
    /// Solution or failure, as for GrBeFGS.
    pub outcome: GenericResult<S, A>,
    /// Children generated over the whole run, counted at generation time.
    pub expanded_nodes: u64,
    /// `actions.len() - 1` on success (0 for zero- and one-action
    /// solutions), 0 on failure.
    pub max_depth: u32,
}

impl<S, A> AStarResult<S, A> {
    #[must_use]
    pub fn solution(&self) -> Option<&Solution<S, A>> {
        self.outcome.solution()
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.outcome.is_failure()
    }
}
