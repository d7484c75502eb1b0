//! Breadth-first search engine.
//!
//! The engine knows nothing about buckets. It drives any [`SearchProblem`]:
//! it pulls `(state, path)` entries from a FIFO frontier, tests each for the
//! goal, and expands unvisited states through the problem's successor
//! function.

mod bfs;
mod problem;
mod stats;

pub use bfs::{solve, BreadthFirstSearch, SearchOutcome, SearchReport};
pub use problem::{FnProblem, SearchProblem};
pub use stats::SearchStats;
