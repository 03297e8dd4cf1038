//! `WriggleState`: one immutable configuration of the puzzle.
//!
//! A state is the ordered list of wrigglers plus the set of empty cells. For a
//! fixed board the empty set is a function of the wriggler bodies, so equality
//! and hashing use the bodies only. Two states reached by different move
//! sequences compare equal whenever every wriggler occupies the same cells in
//! the same order.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use crate::carrier::coord::Coord;
use crate::carrier::wriggler::Wriggler;

/// Index of the wriggler that must reach the goal cell.
pub const PRIMARY_WRIGGLER: usize = 0;

#[derive(Debug, Clone)]
pub struct WriggleState {
    wrigglers: Vec<Wriggler>,
    empty: BTreeSet<Coord>,
}

impl WriggleState {
    /// Assemble a state. The decoder and `apply()` are the only callers that
    /// guarantee `empty` agrees with the bodies.
    #[must_use]
    pub fn new(wrigglers: Vec<Wriggler>, empty: BTreeSet<Coord>) -> Self {
        Self { wrigglers, empty }
    }

    #[must_use]
    pub fn wrigglers(&self) -> &[Wriggler] {
        &self.wrigglers
    }

    #[must_use]
    pub fn wriggler(&self, index: usize) -> Option<&Wriggler> {
        self.wrigglers.get(index)
    }

    /// The wriggler that must reach the goal. `None` only for a state built
    /// by hand with no wrigglers; decoded puzzles always hold at least one.
    #[must_use]
    pub fn primary(&self) -> Option<&Wriggler> {
        self.wrigglers.get(PRIMARY_WRIGGLER)
    }

    #[must_use]
    pub fn empty_cells(&self) -> &BTreeSet<Coord> {
        &self.empty
    }

    #[must_use]
    pub fn is_empty_cell(&self, coord: Coord) -> bool {
        self.empty.contains(&coord)
    }

    /// True when any wriggler segment sits on `coord`.
    #[must_use]
    pub fn occupies(&self, coord: Coord) -> bool {
        self.wrigglers.iter().any(|w| w.contains(coord))
    }

    pub(crate) fn into_parts(self) -> (Vec<Wriggler>, BTreeSet<Coord>) {
        (self.wrigglers, self.empty)
    }
}

impl PartialEq for WriggleState {
    fn eq(&self, other: &Self) -> bool {
        self.wrigglers == other.wrigglers
    }
}

impl Eq for WriggleState {}

impl Hash for WriggleState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.wrigglers.hash(state);
    }
}
