//! A configured pouring puzzle: capacities plus target volume.

use super::builder::PuzzleBuilder;
use super::capacities::Capacities;
use super::error::PuzzleError;
use super::state::BucketState;
use super::transition::get_next_states;
use crate::search::{BreadthFirstSearch, SearchOutcome, SearchProblem, SearchReport};
use crate::validation::{check_puzzle, check_state, into_result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Three buckets and the volume one of them has to end up holding.
///
/// # Example
///
/// ```rust
/// use decant::pouring::{BucketState, Puzzle};
///
/// let puzzle = Puzzle::classic();
/// let path = puzzle.solve(BucketState::CLASSIC_START).into_path().unwrap();
///
/// assert_eq!(path.move_count(), 6);
/// assert!(path.goal().unwrap().is_goal(4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    capacities: Capacities,
    target: u32,
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::classic()
    }
}

impl Puzzle {
    /// Create a puzzle without validating it.
    ///
    /// Use [`Puzzle::builder`] to reject malformed parameters.
    pub const fn new(capacities: Capacities, target: u32) -> Self {
        Self { capacities, target }
    }

    /// Buckets of 8, 5 and 3 with a target of 4.
    pub const fn classic() -> Self {
        Self::new(Capacities::CLASSIC, 4)
    }

    pub fn builder() -> PuzzleBuilder {
        PuzzleBuilder::new()
    }

    pub fn capacities(&self) -> Capacities {
        self.capacities
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// True iff some bucket of `state` holds the target volume.
    pub fn is_goal(&self, state: &BucketState) -> bool {
        state.is_goal(self.target)
    }

    /// The six states one pour away from `state`.
    pub fn next_states(&self, state: &BucketState) -> Vec<BucketState> {
        get_next_states(state, &self.capacities)
    }

    /// Check capacities and target, collecting every violation.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        into_result(check_puzzle(&self.capacities, self.target)).map_err(PuzzleError::InvalidPuzzle)
    }

    /// Check that every level of `state` fits its bucket.
    pub fn validate_state(&self, state: &BucketState) -> Result<(), PuzzleError> {
        into_result(check_state(&self.capacities, state)).map_err(PuzzleError::InvalidState)
    }

    /// Find a shortest pour sequence from `initial` to a goal state.
    ///
    /// Performs no validation.
    pub fn solve(&self, initial: BucketState) -> SearchOutcome<BucketState> {
        self.run(initial).outcome
    }

    /// Like [`Puzzle::solve`], keeping the run statistics.
    pub fn run(&self, initial: BucketState) -> SearchReport<BucketState> {
        let report = BreadthFirstSearch::new().run(self, initial);
        info!(
            capacities = %self.capacities,
            target = self.target,
            %initial,
            solved = report.outcome.is_solved(),
            expanded = report.stats.expanded,
            "puzzle search finished"
        );
        report
    }

    /// Validate `initial` against the capacities, then solve.
    pub fn solve_checked(
        &self,
        initial: BucketState,
    ) -> Result<SearchOutcome<BucketState>, PuzzleError> {
        self.validate_state(&initial)?;
        Ok(self.solve(initial))
    }
}

impl SearchProblem for Puzzle {
    type State = BucketState;

    fn is_goal(&self, state: &BucketState) -> bool {
        Puzzle::is_goal(self, state)
    }

    fn successors(&self, state: &BucketState) -> Vec<BucketState> {
        self.next_states(state)
    }
}
