//! Goal predicates for terminating a search.
//!
//! Goals are pure boolean functions over states. The search engine asks the
//! goal about every state it dequeues and stops at the first one accepted.

use super::state::SearchState;
use std::fmt;
use std::marker::PhantomData;

/// Pure predicate that decides whether a state ends the search.
///
/// # Example
///
/// ```rust
/// use decant::core::{Goal, SearchState};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// struct Depth(u32);
///
/// impl SearchState for Depth {}
///
/// let deep_enough = Goal::new(|d: &Depth| d.0 >= 3);
///
/// assert!(!deep_enough.check(&Depth(2)));
/// assert!(deep_enough.check(&Depth(3)));
/// ```
pub struct Goal<S: SearchState> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: SearchState> Goal<S> {
    /// Create a goal from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Goal {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Goal satisfied by exactly one state value.
    ///
    /// ```rust
    /// use decant::core::Goal;
    /// use decant::pouring::BucketState;
    ///
    /// let goal = Goal::reach(BucketState::new(4, 4, 0));
    /// assert!(goal.check(&BucketState::new(4, 4, 0)));
    /// assert!(!goal.check(&BucketState::new(4, 0, 4)));
    /// ```
    pub fn reach(target: S) -> Self
    where
        S: 'static,
    {
        Self::new(move |state| *state == target)
    }

    /// Check if the state satisfies the goal.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: SearchState> fmt::Debug for Goal<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Goal").finish_non_exhaustive()
    }
}
