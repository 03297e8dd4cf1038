//! `WriggleWorld`: the TJ-Wriggle puzzle as a search world.
//!
//! Actions and successors come straight from the kernel's `legal_actions` and
//! `apply`. The goal test and the heuristic facts read the board: the goal is
//! the bottom-right cell, walls are the permanently blocked cells, and the
//! primary wriggler's head and tail are the reference points.

use wriggle_kernel::carrier::board::Board;
use wriggle_kernel::carrier::coord::Coord;
use wriggle_kernel::carrier::decode::DecodedPuzzle;
use wriggle_kernel::carrier::state::WriggleState;
use wriggle_kernel::operators::action::WriggleAction;
use wriggle_kernel::operators::apply::{apply, legal_actions, ApplyFailure};

use wriggle_search::contract::{GridWorld, SearchWorld};

/// A decoded board, searchable from any state laid out on it.
#[derive(Debug, Clone)]
pub struct WriggleWorld {
    board: Board,
}

impl WriggleWorld {
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// Split a decoded puzzle into its world and initial state.
    #[must_use]
    pub fn from_puzzle(puzzle: DecodedPuzzle) -> (Self, WriggleState) {
        (Self::new(puzzle.board), puzzle.initial_state)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl SearchWorld for WriggleWorld {
    type State = WriggleState;
    type Action = WriggleAction;
    type Error = ApplyFailure;

    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "wriggle"
    }

    fn actions(&self, state: &WriggleState) -> Vec<WriggleAction> {
        legal_actions(&self.board, state)
    }

    fn result(
        &self,
        state: &WriggleState,
        action: &WriggleAction,
    ) -> Result<WriggleState, ApplyFailure> {
        apply(state, action)
    }

    fn is_goal(&self, state: &WriggleState) -> bool {
        self.board.is_goal(state)
    }
}

impl GridWorld for WriggleWorld {
    fn goal_coord(&self) -> Coord {
        self.board.goal()
    }

    fn is_blocked(&self, coord: Coord) -> bool {
        self.board.is_wall(coord)
    }

    fn is_occupied(&self, state: &WriggleState, coord: Coord) -> bool {
        state.occupies(coord)
    }

    /// Head first, then tail, of the primary wriggler. A state with no
    /// wrigglers has nothing to move, so both points sit on the goal.
    fn reference_points(&self, state: &WriggleState) -> (Coord, Coord) {
        state.primary().map_or_else(
            || (self.board.goal(), self.board.goal()),
            |primary| (primary.head(), primary.tail()),
        )
    }
}
