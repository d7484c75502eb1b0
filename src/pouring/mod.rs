//! The three-bucket water pouring puzzle.
//!
//! - [`BucketState`]: fill levels, with the goal test
//! - [`get_next_states`]: the six states one pour away
//! - [`Puzzle`]: capacities and target, searchable by the engine in
//!   [`crate::search`]

mod bucket;
mod builder;
mod capacities;
mod error;
mod puzzle;
mod state;
mod transition;

pub use bucket::{Bucket, Pour};
pub use builder::PuzzleBuilder;
pub use capacities::Capacities;
pub use error::PuzzleError;
pub use puzzle::Puzzle;
pub use state::BucketState;
pub use transition::{apply_pour, get_next_states, next_moves, pour_between};
