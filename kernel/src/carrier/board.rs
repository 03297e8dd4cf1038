//! `Board`: the fixed facts of a puzzle instance.
//!
//! The board owns everything that never changes during a solve: dimensions,
//! wall cells, and the goal cell. Wriggler positions live in
//! [`WriggleState`](crate::carrier::state::WriggleState).

use std::collections::BTreeSet;

use crate::carrier::coord::{Coord, Direction};
use crate::carrier::state::WriggleState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u32,
    height: u32,
    wriggler_count: usize,
    walls: BTreeSet<Coord>,
}

impl Board {
    /// Build a board. `width` and `height` must be non-zero; the decoder
    /// rejects empty grids before getting here.
    #[must_use]
    pub fn new(width: u32, height: u32, wriggler_count: usize, walls: BTreeSet<Coord>) -> Self {
        Self {
            width,
            height,
            wriggler_count,
            walls,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn wriggler_count(&self) -> usize {
        self.wriggler_count
    }

    #[must_use]
    pub fn walls(&self) -> &BTreeSet<Coord> {
        &self.walls
    }

    #[must_use]
    pub fn is_wall(&self, coord: Coord) -> bool {
        self.walls.contains(&coord)
    }

    /// The bottom-right cell.
    #[must_use]
    pub fn goal(&self) -> Coord {
        Coord::new(self.height.saturating_sub(1), self.width.saturating_sub(1))
    }

    #[must_use]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// In-bounds orthogonal neighbours of `coord`, in up/down/left/right order.
    pub fn neighbours(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| coord.step(d))
            .filter(move |&c| self.in_bounds(c))
    }

    /// Goal test: the primary wriggler's head or tail sits on the goal cell.
    #[must_use]
    pub fn is_goal(&self, state: &WriggleState) -> bool {
        let goal = self.goal();
        state
            .primary()
            .is_some_and(|w| w.head() == goal || w.tail() == goal)
    }
}
