//! World implementations for the harness runner.

pub mod wriggle;
