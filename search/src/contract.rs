//! Search world contract traits.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use wriggle_kernel::carrier::coord::Coord;

/// Trait for problems the search strategies can explore.
///
/// # Contract
///
/// - All methods are pure: none may mutate hidden state observable through
///   later calls.
/// - `actions` must be deterministic: the same state yields the same actions
///   in the same order. Tie-breaking in every strategy depends on it.
/// - `result` must succeed for every action `actions` returned for that
///   state. A failure is surfaced to the caller as
///   [`SearchError::WorldFailure`](crate::error::SearchError::WorldFailure)
///   and ends the search.
pub trait SearchWorld {
    /// One configuration of the problem. Equality and hashing must depend
    /// only on the configuration's value.
    type State: Clone + Eq + Hash + Debug;
    /// A transition between states.
    type Action: Clone + Debug;
    /// Failure raised by `result` when handed an inapplicable action.
    type Error: Display;

    /// Stable identifier used in log events.
    fn world_id(&self) -> &str;

    /// Every action applicable from `state`, in a fixed order.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state produced by applying `action` to `state`.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if `action` is not applicable to `state`.
    fn result(&self, state: &Self::State, action: &Self::Action)
        -> Result<Self::State, Self::Error>;

    /// Goal predicate.
    fn is_goal(&self, state: &Self::State) -> bool;
}

/// A search world laid out on a grid, exposing the facts the built-in
/// heuristics read.
///
/// The heuristics never look at a concrete layout: they only ask for the
/// goal cell, whether a cell is permanently blocked, whether a state
/// currently occupies a cell, and the two reference points (the ends) of the
/// primary movable entity.
pub trait GridWorld: SearchWorld {
    /// The cell the primary entity must reach.
    fn goal_coord(&self) -> Coord;

    /// True for cells that are blocked in every state (walls).
    fn is_blocked(&self, coord: Coord) -> bool;

    /// True when some entity segment sits on `coord` in `state`.
    fn is_occupied(&self, state: &Self::State, coord: Coord) -> bool;

    /// The two ends of the primary entity, first end first.
    fn reference_points(&self, state: &Self::State) -> (Coord, Coord);
}
