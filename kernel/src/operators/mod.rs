//! Operators module: the move type and the `legal_actions()` / `apply()` entry points.
//!
//! Depends on `carrier`. Does not import from `proof`.

pub mod action;
pub mod apply;
