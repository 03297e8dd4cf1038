//! Board rendering: the inverse of [`decode`](crate::carrier::decode).
//!
//! Produces one line per row of space-separated tokens, so that
//! `decode_puzzle(header + render(board, state))` yields `state` again.

use crate::carrier::board::Board;
use crate::carrier::coord::{Coord, Direction};
use crate::carrier::state::WriggleState;

fn head_glyph(d: Direction) -> &'static str {
    match d {
        Direction::Up => "U",
        Direction::Down => "D",
        Direction::Left => "L",
        Direction::Right => "R",
    }
}

fn body_glyph(d: Direction) -> &'static str {
    match d {
        Direction::Up => "^",
        Direction::Down => "v",
        Direction::Left => "<",
        Direction::Right => ">",
    }
}

/// Render `state` on `board` as puzzle grid text (no header, no trailing newline).
#[must_use]
pub fn render(board: &Board, state: &WriggleState) -> String {
    let width = board.width() as usize;
    let height = board.height() as usize;
    let mut grid: Vec<Vec<String>> = vec![vec!["e".to_string(); width]; height];

    let mut put = |at: Coord, token: String| {
        if let Some(cell) = grid
            .get_mut(at.row as usize)
            .and_then(|r| r.get_mut(at.col as usize))
        {
            *cell = token;
        }
    };

    for &wall in board.walls() {
        put(wall, "x".to_string());
    }

    for (index, wriggler) in state.wrigglers().iter().enumerate() {
        let body = wriggler.body();
        for (i, pair) in body.windows(2).enumerate() {
            // Adjacency is a `Wriggler` invariant.
            let Some(d) = pair[0].direction_to(pair[1]) else {
                continue;
            };
            let glyph = if i == 0 { head_glyph(d) } else { body_glyph(d) };
            put(pair[0], glyph.to_string());
        }
        put(wriggler.tail(), index.to_string());
    }

    grid.iter()
        .map(|row| row.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a full puzzle file (header line plus grid) for `state`.
#[must_use]
pub fn render_puzzle(board: &Board, state: &WriggleState) -> String {
    format!(
        "{} {} {}\n{}\n",
        board.width(),
        board.height(),
        board.wriggler_count(),
        render(board, state)
    )
}
