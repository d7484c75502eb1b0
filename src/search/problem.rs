//! The seam between the search engine and a concrete puzzle.

use crate::core::{Goal, SearchState};
use std::fmt;

/// A graph to search: a goal test plus a successor function.
///
/// Successors are explored in the order returned, which decides the path
/// reported when several shortest paths exist.
pub trait SearchProblem {
    type State: SearchState;

    /// True if `state` ends the search.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// States one transition away from `state`, in a stable order.
    ///
    /// May contain duplicates and `state` itself; the engine filters them
    /// through its visited set.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;
}

/// A [`SearchProblem`] assembled from a goal and a successor closure.
///
/// # Example
///
/// ```rust
/// use decant::core::{Goal, SearchState};
/// use decant::search::{solve, FnProblem};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// struct N(u32);
///
/// impl SearchState for N {}
///
/// // Reach 10 from 1 using "+1" and "*2".
/// let problem = FnProblem::new(Goal::reach(N(10)), |n: &N| vec![N(n.0 + 1), N(n.0 * 2)]);
/// let path = solve(&problem, N(1)).into_path().unwrap();
///
/// assert_eq!(path.move_count(), 4); // 1 -> 2 -> 4 -> 5 -> 10
/// ```
pub struct FnProblem<S, F>
where
    S: SearchState,
    F: Fn(&S) -> Vec<S>,
{
    goal: Goal<S>,
    successors: F,
}

impl<S, F> FnProblem<S, F>
where
    S: SearchState,
    F: Fn(&S) -> Vec<S>,
{
    pub fn new(goal: Goal<S>, successors: F) -> Self {
        Self { goal, successors }
    }
}

impl<S, F> SearchProblem for FnProblem<S, F>
where
    S: SearchState,
    F: Fn(&S) -> Vec<S>,
{
    type State = S;

    fn is_goal(&self, state: &S) -> bool {
        self.goal.check(state)
    }

    fn successors(&self, state: &S) -> Vec<S> {
        (self.successors)(state)
    }
}

impl<S, F> fmt::Debug for FnProblem<S, F>
where
    S: SearchState,
    F: Fn(&S) -> Vec<S>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProblem")
            .field("goal", &self.goal)
            .finish_non_exhaustive()
    }
}
