//! Wriggle Search: classical state-space search over any `SearchWorld`.
//!
//! This crate provides the search layer. It depends only on
//! `wriggle_kernel` (for grid coordinates) and does NOT depend on
//! `wriggle_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! wriggle_kernel  ←  wriggle_search  ←  wriggle_harness
//! (puzzle domain)    (frontiers, nodes)   (world adapter, runner, CLI)
//! ```
//!
//! # Key types
//!
//! - [`node::SearchNode`] -- state plus path bookkeeping, equal and hashed by state
//! - [`frontier::FifoFrontier`] -- FIFO queue for tree search
//! - [`frontier::PriorityFrontier`] -- min-priority queue with lazy deletion
//! - [`heuristic::HeuristicKind`] -- Manhattan-distance and obstacle-count estimates
//! - [`contract::SearchWorld`] -- trait for problems the strategies can search
//! - [`search`] -- `bfts`, `id_dfts`, `grbefgs`, `a_star_gs`
//! - [`policy::SearchPolicyV1`] -- strategy, heuristic, and depth-bound configuration

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod result;
pub mod search;
