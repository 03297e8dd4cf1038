//! Puzzle text decoding: the boundary between puzzle files and typed state.
//!
//! # Format
//!
//! ```text
//! <width> <height> <wriggler_count>
//! <width tokens>      } repeated <height> times
//! ```
//!
//! | Token        | Meaning                                              |
//! |--------------|------------------------------------------------------|
//! | `e`          | empty cell                                           |
//! | `x`          | wall                                                 |
//! | `U D L R`    | head; the next segment is up / down / left / right   |
//! | `^ v < >`    | body; the next segment is up / down / left / right   |
//! | digits `i`   | tail of wriggler `i`                                 |
//!
//! Each body is traced from its head by following the direction glyphs until
//! a tail token is reached. Blank lines are ignored.

use std::collections::BTreeSet;
use std::fmt;

use crate::carrier::board::Board;
use crate::carrier::coord::{Coord, Direction};
use crate::carrier::state::WriggleState;
use crate::carrier::wriggler::Wriggler;

/// Typed failure for puzzle decoding. Fail-closed: no partial puzzles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The first line is not three non-negative integers.
    BadHeader { detail: String },
    /// The header declares an empty grid or zero wrigglers.
    EmptyPuzzle,
    /// A row does not hold `width` tokens.
    RowWidth {
        row: usize,
        expected: u32,
        actual: usize,
    },
    /// The number of rows does not match `height`.
    RowCount { expected: u32, actual: usize },
    /// A token is not part of the board alphabet.
    UnknownToken { at: Coord, token: String },
    /// A tail names a wriggler index outside `0..wriggler_count`.
    TailIndexOutOfRange { at: Coord, index: usize },
    /// Two tails name the same wriggler.
    DuplicateWriggler { index: usize },
    /// Head and tail counts disagree with the header.
    EndCountMismatch {
        expected: usize,
        heads: usize,
        tails: usize,
    },
    /// Following a body from its head did not end at a tail.
    BrokenBody { head: Coord, detail: String },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadHeader { detail } => write!(f, "bad puzzle header: {detail}"),
            Self::EmptyPuzzle => write!(f, "puzzle declares an empty grid or no wrigglers"),
            Self::RowWidth {
                row,
                expected,
                actual,
            } => write!(f, "row {row} has {actual} cells, expected {expected}"),
            Self::RowCount { expected, actual } => {
                write!(f, "puzzle has {actual} rows, expected {expected}")
            }
            Self::UnknownToken { at, token } => write!(f, "unknown token {token:?} at {at}"),
            Self::TailIndexOutOfRange { at, index } => {
                write!(f, "tail at {at} names wriggler {index}, which is out of range")
            }
            Self::DuplicateWriggler { index } => write!(f, "wriggler {index} has two tails"),
            Self::EndCountMismatch {
                expected,
                heads,
                tails,
            } => write!(
                f,
                "expected {expected} wrigglers, found {heads} heads and {tails} tails"
            ),
            Self::BrokenBody { head, detail } => {
                write!(f, "wriggler body starting at {head} is broken: {detail}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// A decoded puzzle: the fixed board and the starting configuration.
#[derive(Debug, Clone)]
pub struct DecodedPuzzle {
    pub board: Board,
    pub initial_state: WriggleState,
}

/// One grid token after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cell {
    Empty,
    Wall,
    Head(Direction),
    Body(Direction),
    Tail(usize),
}

impl Cell {
    fn parse(token: &str) -> Option<Self> {
        let cell = match token {
            "e" => Self::Empty,
            "x" => Self::Wall,
            "U" => Self::Head(Direction::Up),
            "D" => Self::Head(Direction::Down),
            "L" => Self::Head(Direction::Left),
            "R" => Self::Head(Direction::Right),
            "^" => Self::Body(Direction::Up),
            "v" => Self::Body(Direction::Down),
            "<" => Self::Body(Direction::Left),
            ">" => Self::Body(Direction::Right),
            digits if digits.bytes().all(|b| b.is_ascii_digit()) => {
                Self::Tail(digits.parse().ok()?)
            }
            _ => return None,
        };
        Some(cell)
    }
}

/// Decode puzzle text into a board and its initial state.
///
/// # Errors
///
/// Returns [`DecodeError`] when the header, grid shape, tokens, or wriggler
/// bodies are malformed.
pub fn decode_puzzle(text: &str) -> Result<DecodedPuzzle, DecodeError> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let header = lines.next().ok_or_else(|| DecodeError::BadHeader {
        detail: "missing header line".into(),
    })?;
    let (width, height, wriggler_count) = parse_header(header)?;
    if width == 0 || height == 0 || wriggler_count == 0 {
        return Err(DecodeError::EmptyPuzzle);
    }

    // Rows are counted as they arrive; the header alone never sizes an allocation.
    let mut grid: Vec<Vec<Cell>> = Vec::new();
    for (row, line) in lines.enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != width as usize {
            return Err(DecodeError::RowWidth {
                row,
                expected: width,
                actual: tokens.len(),
            });
        }
        let mut cells = Vec::with_capacity(tokens.len());
        for (col, token) in tokens.into_iter().enumerate() {
            let at = grid_coord(row, col);
            let cell = Cell::parse(token).ok_or_else(|| DecodeError::UnknownToken {
                at,
                token: token.to_string(),
            })?;
            if let Cell::Tail(index) = cell {
                if index >= wriggler_count {
                    return Err(DecodeError::TailIndexOutOfRange { at, index });
                }
            }
            cells.push(cell);
        }
        grid.push(cells);
    }
    if grid.len() != height as usize {
        return Err(DecodeError::RowCount {
            expected: height,
            actual: grid.len(),
        });
    }

    let mut walls = BTreeSet::new();
    let mut empty = BTreeSet::new();
    let mut heads = Vec::new();
    let mut tails = 0usize;
    for (row, cells) in grid.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let at = grid_coord(row, col);
            match cell {
                Cell::Wall => {
                    walls.insert(at);
                }
                Cell::Empty => {
                    empty.insert(at);
                }
                Cell::Head(_) => heads.push(at),
                Cell::Tail(_) => tails += 1,
                Cell::Body(_) => {}
            }
        }
    }
    if heads.len() != wriggler_count || tails != wriggler_count {
        return Err(DecodeError::EndCountMismatch {
            expected: wriggler_count,
            heads: heads.len(),
            tails,
        });
    }

    let mut slots: Vec<Option<Wriggler>> = vec![None; wriggler_count];
    for head in heads {
        let (index, body) = trace_body(&grid, head)?;
        let wriggler = Wriggler::new(body).ok_or_else(|| DecodeError::BrokenBody {
            head,
            detail: "body is not a chain of adjacent cells".into(),
        })?;
        if slots[index].replace(wriggler).is_some() {
            return Err(DecodeError::DuplicateWriggler { index });
        }
    }
    // Counts matched and no index repeated, so every slot is filled.
    let wrigglers: Vec<Wriggler> = slots.into_iter().flatten().collect();

    Ok(DecodedPuzzle {
        board: Board::new(width, height, wriggler_count, walls),
        initial_state: WriggleState::new(wrigglers, empty),
    })
}

fn parse_header(line: &str) -> Result<(u32, u32, usize), DecodeError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(DecodeError::BadHeader {
            detail: format!("expected 3 fields, got {}", fields.len()),
        });
    }
    let bad = |field: &str| DecodeError::BadHeader {
        detail: format!("{field:?} is not a non-negative integer"),
    };
    let width = fields[0].parse().map_err(|_| bad(fields[0]))?;
    let height = fields[1].parse().map_err(|_| bad(fields[1]))?;
    let count = fields[2].parse().map_err(|_| bad(fields[2]))?;
    Ok((width, height, count))
}

#[allow(clippy::cast_possible_truncation)]
fn grid_coord(row: usize, col: usize) -> Coord {
    // Row and column counts were parsed as u32, so indices fit.
    Coord::new(row as u32, col as u32)
}

fn cell_at(grid: &[Vec<Cell>], at: Coord) -> Option<Cell> {
    grid.get(at.row as usize)?.get(at.col as usize).copied()
}

/// Follow direction glyphs from `head` to the tail, returning the tail's
/// wriggler index and the body cells, head first.
fn trace_body(grid: &[Vec<Cell>], head: Coord) -> Result<(usize, Vec<Coord>), DecodeError> {
    let cell_count: usize = grid.iter().map(Vec::len).sum();
    let mut body = vec![head];
    let mut at = head;

    loop {
        let direction = match cell_at(grid, at) {
            Some(Cell::Head(d)) if at == head => d,
            Some(Cell::Body(d)) if at != head => d,
            Some(Cell::Tail(index)) if at != head => return Ok((index, body)),
            other => {
                return Err(DecodeError::BrokenBody {
                    head,
                    detail: format!("unexpected {other:?} at {at}"),
                })
            }
        };
        at = at
            .step(direction)
            .filter(|c| cell_at(grid, *c).is_some())
            .ok_or_else(|| DecodeError::BrokenBody {
                head,
                detail: format!("segment at {at} points off the board"),
            })?;
        if body.len() > cell_count {
            return Err(DecodeError::BrokenBody {
                head,
                detail: "body loops back on itself".into(),
            });
        }
        body.push(at);
    }
}
