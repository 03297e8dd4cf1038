//! Proof module: domain-separated content hashing for puzzle and solution artifacts.

pub mod hash;
