//! Shared fixtures and helpers for the lock tests.
//!
//! Puzzle fixtures live in `tests/lock/fixtures/` and are embedded at compile
//! time so the tests never depend on the working directory.

#![forbid(unsafe_code)]

use std::cell::Cell;

use wriggle_harness::worlds::wriggle::WriggleWorld;
use wriggle_kernel::carrier::coord::Coord;
use wriggle_kernel::carrier::decode::decode_puzzle;
use wriggle_kernel::carrier::state::WriggleState;
use wriggle_kernel::operators::action::WriggleAction;
use wriggle_kernel::operators::apply::apply;
use wriggle_search::contract::{GridWorld, SearchWorld};

/// One-row corridor; the tail walks right three times.
pub const CORRIDOR: &str = include_str!("../fixtures/corridor.txt");
/// One tail move reaches the goal.
pub const ONE_MOVE: &str = include_str!("../fixtures/one_move.txt");
/// The primary tail already sits on the goal.
pub const AT_GOAL: &str = include_str!("../fixtures/at_goal.txt");
/// No legal moves at all.
pub const STUCK: &str = include_str!("../fixtures/stuck.txt");
/// The goal cell is a wall; the state space is a two-state cycle.
pub const WALLED_GOAL: &str = include_str!("../fixtures/walled_goal.txt");
/// Wriggler 1 sits on the goal and must step aside. Optimal: 5 moves.
pub const CROSSING: &str = include_str!("../fixtures/crossing.txt");
/// A three-segment wriggler turning a corner. Optimal: 2 moves.
pub const HOOK: &str = include_str!("../fixtures/hook.txt");

/// Solvable fixtures with their optimal action counts.
pub const SOLVABLE: [(&str, &str, usize); 5] = [
    ("at_goal", AT_GOAL, 0),
    ("one_move", ONE_MOVE, 1),
    ("hook", HOOK, 2),
    ("corridor", CORRIDOR, 3),
    ("crossing", CROSSING, 5),
];

/// Decode a fixture into its world and initial state.
///
/// # Panics
///
/// Panics if the fixture does not decode. Fixtures are test-only invariants.
#[must_use]
pub fn load(text: &str) -> (WriggleWorld, WriggleState) {
    WriggleWorld::from_puzzle(decode_puzzle(text).unwrap())
}

/// Apply `actions` from `initial` through the kernel, returning the final
/// state.
///
/// # Panics
///
/// Panics if any action is illegal in the state it is applied to.
#[must_use]
pub fn replay(initial: &WriggleState, actions: &[WriggleAction]) -> WriggleState {
    actions.iter().fold(initial.clone(), |state, action| {
        apply(&state, action).unwrap_or_else(|e| panic!("replay rejected {action}: {e}"))
    })
}

/// Wraps a world and counts `result` calls, i.e. generated children.
pub struct CountingWorld<W> {
    inner: W,
    generated: Cell<u64>,
}

impl<W> CountingWorld<W> {
    #[must_use]
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            generated: Cell::new(0),
        }
    }

    #[must_use]
    pub fn generated(&self) -> u64 {
        self.generated.get()
    }
}

impl<W: SearchWorld> SearchWorld for CountingWorld<W> {
    type State = W::State;
    type Action = W::Action;
    type Error = W::Error;

    fn world_id(&self) -> &str {
        self.inner.world_id()
    }

    fn actions(&self, state: &W::State) -> Vec<W::Action> {
        self.inner.actions(state)
    }

    fn result(&self, state: &W::State, action: &W::Action) -> Result<W::State, W::Error> {
        self.generated.set(self.generated.get() + 1);
        self.inner.result(state, action)
    }

    fn is_goal(&self, state: &W::State) -> bool {
        self.inner.is_goal(state)
    }
}

impl<W: GridWorld> GridWorld for CountingWorld<W> {
    fn goal_coord(&self) -> Coord {
        self.inner.goal_coord()
    }

    fn is_blocked(&self, coord: Coord) -> bool {
        self.inner.is_blocked(coord)
    }

    fn is_occupied(&self, state: &W::State, coord: Coord) -> bool {
        self.inner.is_occupied(state, coord)
    }

    fn reference_points(&self, state: &W::State) -> (Coord, Coord) {
        self.inner.reference_points(state)
    }
}
