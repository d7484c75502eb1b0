//! Errors raised when building or solving a puzzle.

use crate::validation::{describe_all, Violation};
use thiserror::Error;

/// Errors that can occur when building a puzzle or validating a start state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Capacities not specified. Call .capacities(a, b, c) before .build()")]
    MissingCapacities,

    #[error("Target volume not specified. Call .target(volume) before .build()")]
    MissingTarget,

    #[error("Invalid puzzle: {}", describe_all(.0))]
    InvalidPuzzle(Vec<Violation>),

    #[error("Invalid starting state: {}", describe_all(.0))]
    InvalidState(Vec<Violation>),
}

impl PuzzleError {
    /// Violations carried by this error, if any.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::InvalidPuzzle(violations) | Self::InvalidState(violations) => violations,
            Self::MissingCapacities | Self::MissingTarget => &[],
        }
    }
}
