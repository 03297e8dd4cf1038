//! Shared puzzle regimes for the wriggle benchmark suites.

use wriggle_harness::worlds::wriggle::WriggleWorld;
use wriggle_kernel::carrier::decode::decode_puzzle;
use wriggle_kernel::carrier::state::WriggleState;

/// A generated puzzle and whether tree search finishes on it in benchmark time.
pub struct Regime {
    pub name: &'static str,
    pub text: String,
    /// BFTS and ID-DFTS revisit states, so only small regimes admit them.
    pub tree_search_ok: bool,
}

impl Regime {
    /// Decode the regime into a world and its initial state.
    ///
    /// # Panics
    ///
    /// Panics if the generated text does not decode. Generators are
    /// benchmark-only invariants.
    #[must_use]
    pub fn load(&self) -> (WriggleWorld, WriggleState) {
        let puzzle = decode_puzzle(&self.text).expect("regime puzzle decodes");
        WriggleWorld::from_puzzle(puzzle)
    }
}

/// An open `width` x `height` room with a two-cell wriggler in the top-left
/// corner.
///
/// # Panics
///
/// Panics if the room is narrower than three cells.
#[must_use]
pub fn open_room(width: usize, height: usize) -> String {
    assert!(width >= 3, "room must fit the wriggler and one free cell");
    let mut text = format!("{width} {height} 1\n");
    let mut first = vec!["R", "0"];
    first.resize(width, "e");
    text.push_str(&first.join(" "));
    text.push('\n');
    for _ in 1..height {
        text.push_str(&vec!["e"; width].join(" "));
        text.push('\n');
    }
    text
}

/// A room split by a wall column with a single gap on the bottom row, and a
/// second wriggler parked on the goal.
#[must_use]
pub fn walled_room() -> String {
    [
        "6 4 2",
        "R 0 e x e e",
        "e e e x e e",
        "e e e x e e",
        "e e e e 1 L",
        "",
    ]
    .join("\n")
}

/// The regimes the strategy benchmarks sweep.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    vec![
        Regime {
            name: "room_4x3",
            text: open_room(4, 3),
            tree_search_ok: true,
        },
        Regime {
            name: "room_8x8",
            text: open_room(8, 8),
            tree_search_ok: false,
        },
        Regime {
            name: "walled_6x4",
            text: walled_room(),
            tree_search_ok: false,
        },
    ]
}
