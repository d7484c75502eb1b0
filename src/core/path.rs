//! Solution paths through the search graph.
//!
//! A path is the ordered list of states visited from the initial state to a
//! goal, both ends included. Paths are immutable: extending one returns a new
//! path and leaves the original untouched, so sibling frontier entries can
//! share a parent's prefix without interfering with each other.

use super::state::SearchState;
use serde::{Deserialize, Serialize};

/// Ordered sequence of states from an initial state to a goal.
///
/// # Example
///
/// ```rust
/// use decant::core::SolutionPath;
/// use decant::pouring::BucketState;
///
/// let path = SolutionPath::new()
///     .record(BucketState::new(8, 0, 0))
///     .record(BucketState::new(3, 5, 0));
///
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.move_count(), 1);
/// assert_eq!(path.goal(), Some(&BucketState::new(3, 5, 0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct SolutionPath<S: SearchState> {
    states: Vec<S>,
}

impl<S: SearchState> Default for SolutionPath<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SearchState> SolutionPath<S> {
    /// Create an empty path.
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Record a state, returning a new path.
    ///
    /// This is a pure function - it does not mutate the existing path
    /// but returns a new one with the state appended.
    ///
    /// ```rust
    /// use decant::core::SolutionPath;
    /// use decant::pouring::BucketState;
    ///
    /// let path = SolutionPath::new();
    /// let extended = path.record(BucketState::new(8, 0, 0));
    ///
    /// assert_eq!(extended.len(), 1);
    /// assert!(path.is_empty()); // Original unchanged
    /// ```
    pub fn record(&self, state: S) -> Self {
        let mut states = self.states.clone();
        states.push(state);
        Self { states }
    }

    /// All states in order, initial state first.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Consume the path, yielding its states.
    pub fn into_states(self) -> Vec<S> {
        self.states
    }

    /// First state of the path.
    pub fn initial(&self) -> Option<&S> {
        self.states.first()
    }

    /// Last state of the path; for a finished search this is the goal.
    pub fn goal(&self) -> Option<&S> {
        self.states.last()
    }

    /// Number of states on the path.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of transitions taken, one less than the number of states.
    pub fn move_count(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    /// Consecutive `(from, to)` pairs along the path.
    ///
    /// ```rust
    /// use decant::core::SolutionPath;
    /// use decant::pouring::BucketState;
    ///
    /// let path = SolutionPath::new()
    ///     .record(BucketState::new(8, 0, 0))
    ///     .record(BucketState::new(3, 5, 0))
    ///     .record(BucketState::new(3, 2, 3));
    ///
    /// let steps: Vec<_> = path.steps().collect();
    /// assert_eq!(steps.len(), 2);
    /// assert_eq!(steps[1], (&BucketState::new(3, 5, 0), &BucketState::new(3, 2, 3)));
    /// ```
    pub fn steps(&self) -> impl Iterator<Item = (&S, &S)> + '_ {
        self.states.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Render every state with [`SearchState::describe`], joined by `separator`.
    pub fn render(&self, separator: &str) -> String {
        self.states
            .iter()
            .map(SearchState::describe)
            .collect::<Vec<_>>()
            .join(separator)
    }
}
