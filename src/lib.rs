//! Decant: shortest solutions to the three-bucket water pouring puzzle
//!
//! Three buckets of fixed capacity hold some water. A pour empties one bucket
//! into another until the source is empty or the destination is full. The
//! goal is to leave some bucket holding a target volume using as few pours as
//! possible.
//!
//! The crate is split into a pure search core and the puzzle built on it.
//!
//! # Core Concepts
//!
//! - **State**: value types searched by the engine, via the `SearchState` trait
//! - **Search**: a generic breadth-first engine over any `SearchProblem`
//! - **Pouring**: bucket states, the pour transition function and `Puzzle`
//! - **Validation**: checks that report every malformed parameter at once
//!
//! # Example
//!
//! ```rust
//! use decant::pouring::{BucketState, Puzzle};
//! use decant::search::SearchOutcome;
//!
//! let puzzle = Puzzle::builder().capacities(8, 5, 3).target(4).build().unwrap();
//!
//! match puzzle.solve(BucketState::new(8, 0, 0)) {
//!     SearchOutcome::Solved(path) => {
//!         assert_eq!(path.move_count(), 6);
//!         assert_eq!(path.goal(), Some(&BucketState::new(1, 4, 3)));
//!     }
//!     SearchOutcome::NoSolution => unreachable!(),
//! }
//! ```

pub mod config;
pub mod core;
pub mod pouring;
pub mod report;
pub mod search;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{Goal, SearchState, SolutionPath};
pub use pouring::{BucketState, Capacities, Puzzle, PuzzleError};
pub use search::{solve, BreadthFirstSearch, SearchOutcome, SearchProblem};
