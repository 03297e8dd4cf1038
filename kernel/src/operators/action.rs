//! `WriggleAction`: move one end of one wriggler into an adjacent empty cell.

use std::fmt;

use crate::carrier::coord::Coord;
use crate::carrier::wriggler::WrigglerEnd;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WriggleAction {
    /// Index of the wriggler being moved.
    pub wriggler: usize,
    /// Which end leads the move.
    pub end: WrigglerEnd,
    /// Destination of the leading end.
    pub to: Coord,
}

impl WriggleAction {
    #[must_use]
    pub const fn new(wriggler: usize, end: WrigglerEnd, to: Coord) -> Self {
        Self { wriggler, end, to }
    }

    /// The solution-file line for this move: `wriggler end col row`.
    #[must_use]
    pub fn solution_line(&self) -> String {
        format!(
            "{} {} {} {}",
            self.wriggler,
            self.end.code(),
            self.to.col,
            self.to.row
        )
    }
}

impl fmt::Display for WriggleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = match self.end {
            WrigglerEnd::Head => "head",
            WrigglerEnd::Tail => "tail",
        };
        write!(f, "move {}'s {end} to {}", self.wriggler, self.to)
    }
}
