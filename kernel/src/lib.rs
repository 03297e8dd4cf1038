//! Wriggle Kernel: the TJ-Wriggle puzzle domain.
//!
//! # API Surface
//!
//! - [`carrier::decode::decode_puzzle`] -- parse puzzle text into a `Board` and initial `WriggleState`
//! - [`operators::apply::legal_actions`] -- enumerate the moves available from a state
//! - [`operators::apply::apply`] -- apply a move, producing a new state
//! - [`carrier::render::render`] -- render a state back into puzzle text
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators`, and `proof` stands alone.
//!
//! One-way only. `operators` depends on `carrier`; `carrier` depends on
//! nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod proof;
