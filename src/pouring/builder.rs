//! Builder for constructing validated puzzles.

use super::capacities::Capacities;
use super::error::PuzzleError;
use super::puzzle::Puzzle;
use crate::validation::{check_puzzle, into_result, ViolationStrategy};
use tracing::warn;

/// Builder for constructing puzzles with a fluent API.
///
/// # Example
///
/// ```rust
/// use decant::pouring::{Puzzle, PuzzleError};
///
/// let puzzle = Puzzle::builder().capacities(12, 7, 4).target(6).build().unwrap();
/// assert_eq!(puzzle.target(), 6);
///
/// let err = Puzzle::builder().capacities(1, 1, 1).target(4).build().unwrap_err();
/// assert!(matches!(err, PuzzleError::InvalidPuzzle(_)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PuzzleBuilder {
    capacities: Option<Capacities>,
    target: Option<u32>,
    on_violation: ViolationStrategy,
}

impl PuzzleBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the three bucket capacities (required).
    pub fn capacities(self, a: u32, b: u32, c: u32) -> Self {
        self.with_capacities(Capacities::new(a, b, c))
    }

    /// Set the capacities from an existing value (required).
    pub fn with_capacities(mut self, capacities: Capacities) -> Self {
        self.capacities = Some(capacities);
        self
    }

    /// Set the target volume (required).
    pub fn target(mut self, target: u32) -> Self {
        self.target = Some(target);
        self
    }

    /// Set violation handling strategy.
    pub fn on_violation(mut self, strategy: ViolationStrategy) -> Self {
        self.on_violation = strategy;
        self
    }

    /// Build the puzzle.
    /// Returns an error if required fields are missing or, under
    /// [`ViolationStrategy::Reject`], if any validation rule fails.
    pub fn build(self) -> Result<Puzzle, PuzzleError> {
        let capacities = self.capacities.ok_or(PuzzleError::MissingCapacities)?;
        let target = self.target.ok_or(PuzzleError::MissingTarget)?;

        if let Err(violations) = into_result(check_puzzle(&capacities, target)) {
            match self.on_violation {
                ViolationStrategy::Reject => return Err(PuzzleError::InvalidPuzzle(violations)),
                ViolationStrategy::WarnAndContinue => {
                    for violation in &violations {
                        warn!(%violation, "building puzzle despite violation");
                    }
                }
            }
        }

        Ok(Puzzle::new(capacities, target))
    }
}
