//! Carrier module: coordinates, wrigglers, states, the board, and the text boundary.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod board;
pub mod coord;
pub mod decode;
pub mod render;
pub mod state;
pub mod wriggler;
