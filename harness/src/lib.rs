//! Wriggle Harness: puzzle-level orchestration over the search crate.
//!
//! The harness decodes a puzzle, runs the configured strategy through the
//! [`worlds::wriggle::WriggleWorld`] adapter, and packages the outcome as a
//! solution file and a JSON report.
//!
//! The harness does NOT implement search logic; it delegates to
//! `wriggle_search`. Puzzle rules live in `wriggle_kernel`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod branching;
pub mod bundle;
pub mod runner;
pub mod worlds;
