//! Core search types.
//!
//! This module contains the pure building blocks shared by every search:
//! - State values via the `SearchState` trait
//! - Goal predicates that end a search
//! - Immutable solution paths
//!
//! Nothing in this module performs I/O or mutates shared data.

mod goal;
mod path;
mod state;

pub use goal::Goal;
pub use path::SolutionPath;
pub use state::SearchState;
