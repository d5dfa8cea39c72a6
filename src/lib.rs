//! Greedy best-first solver for the 3×3 sliding-tile puzzle.
//!
//! The engine discovers configurations incrementally, records every blank-swap
//! it generates in a [`StateGraph`], and always expands the frontier candidate
//! with the lowest [`heuristic::score`].

pub mod error;
pub mod frontier;
pub mod graph;
pub mod heuristic;
pub mod puzzle;
pub mod render;
pub mod solver;

pub use error::PuzzleError;
pub use frontier::{Candidate, FrontierStrategy, RankedWorklist};
pub use graph::StateGraph;
pub use puzzle::{Configuration, Move, GOAL};
pub use solver::{moves_for_path, solve, SearchOutcome, SearchStats, Solver, SolverConfig};
