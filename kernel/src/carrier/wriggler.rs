//! `Wriggler`: a movable piece made of a chain of adjacent cells.

use crate::carrier::coord::Coord;

/// Which end of a wriggler moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WrigglerEnd {
    Head,
    Tail,
}

impl WrigglerEnd {
    /// Numeric code used by the solution file (`0` head, `1` tail).
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Head => 0,
            Self::Tail => 1,
        }
    }
}

/// A wriggler body, head first and tail last.
///
/// Invariant: at least two cells, each adjacent to the next. Enforced by
/// [`Wriggler::new`]; the decoder and `apply()` are the only producers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Wriggler {
    body: Vec<Coord>,
}

impl Wriggler {
    /// Build a wriggler from its body cells, head first.
    ///
    /// Returns `None` if the body has fewer than two cells or is not a chain of
    /// adjacent cells.
    #[must_use]
    pub fn new(body: Vec<Coord>) -> Option<Self> {
        if body.len() < 2 {
            return None;
        }
        if !body.windows(2).all(|w| w[0].is_adjacent(w[1])) {
            return None;
        }
        Some(Self { body })
    }

    #[must_use]
    pub fn head(&self) -> Coord {
        self.body[0]
    }

    #[must_use]
    pub fn tail(&self) -> Coord {
        self.body[self.body.len() - 1]
    }

    /// The cell at the given end.
    #[must_use]
    pub fn end(&self, end: WrigglerEnd) -> Coord {
        match end {
            WrigglerEnd::Head => self.head(),
            WrigglerEnd::Tail => self.tail(),
        }
    }

    #[must_use]
    pub fn body(&self) -> &[Coord] {
        &self.body
    }

    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.body.contains(&coord)
    }

    /// Move one end into `to`, dragging the rest of the body along.
    ///
    /// Returns the moved wriggler and the cell vacated by the opposite end.
    /// The caller is responsible for checking that `to` is free and adjacent.
    #[must_use]
    pub(crate) fn advanced(&self, end: WrigglerEnd, to: Coord) -> (Self, Coord) {
        let len = self.body.len();
        match end {
            WrigglerEnd::Head => {
                let mut body = Vec::with_capacity(len);
                body.push(to);
                body.extend_from_slice(&self.body[..len - 1]);
                (Self { body }, self.tail())
            }
            WrigglerEnd::Tail => {
                let mut body = Vec::with_capacity(len);
                body.extend_from_slice(&self.body[1..]);
                body.push(to);
                (Self { body }, self.head())
            }
        }
    }
}
