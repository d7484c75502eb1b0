//! Breadth-first search over a [`SearchProblem`].

use super::problem::SearchProblem;
use super::stats::SearchStats;
use crate::core::{SearchState, SolutionPath};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use tracing::{debug, trace};

/// Result of a search: a shortest path to a goal, or proof that none exists.
///
/// Both are ordinary results; an unreachable goal is not an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "", tag = "status", content = "path", rename_all = "snake_case")]
pub enum SearchOutcome<S: SearchState> {
    /// Path from the initial state to the first goal dequeued, both inclusive
    Solved(SolutionPath<S>),

    /// Every reachable state was expanded without meeting the goal
    NoSolution,
}

impl<S: SearchState> SearchOutcome<S> {
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    pub fn path(&self) -> Option<&SolutionPath<S>> {
        match self {
            Self::Solved(path) => Some(path),
            Self::NoSolution => None,
        }
    }

    pub fn into_path(self) -> Option<SolutionPath<S>> {
        match self {
            Self::Solved(path) => Some(path),
            Self::NoSolution => None,
        }
    }
}

/// Outcome of a run together with its counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct SearchReport<S: SearchState> {
    pub outcome: SearchOutcome<S>,
    pub stats: SearchStats,
}

/// Breadth-first search engine.
///
/// Each run owns a fresh frontier and visited set, so one engine can serve
/// any number of independent runs.
///
/// The goal test happens when an entry is dequeued and before the visited
/// check. Because edges are unweighted and the frontier is FIFO, the first
/// goal dequeued lies at minimal depth.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirstSearch;

impl BreadthFirstSearch {
    pub fn new() -> Self {
        Self
    }

    /// Search from `initial`, returning the outcome and run statistics.
    pub fn run<P: SearchProblem>(&self, problem: &P, initial: P::State) -> SearchReport<P::State> {
        let mut stats = SearchStats::started();
        let mut frontier: VecDeque<(P::State, SolutionPath<P::State>)> = VecDeque::new();
        let mut visited: HashSet<P::State> = HashSet::new();

        debug!(initial = %initial.describe(), "starting breadth-first search");

        frontier.push_back((initial, SolutionPath::new()));
        stats.enqueued = 1;
        stats.peak_frontier = 1;

        while let Some((current, path)) = frontier.pop_front() {
            stats.dequeued += 1;
            trace!(state = %current.describe(), depth = path.len(), "dequeued");

            if problem.is_goal(&current) {
                let solution = path.record(current);
                stats.finish();
                debug!(
                    moves = solution.move_count(),
                    dequeued = stats.dequeued,
                    expanded = stats.expanded,
                    "goal reached"
                );
                return SearchReport {
                    outcome: SearchOutcome::Solved(solution),
                    stats,
                };
            }

            if !visited.insert(current.clone()) {
                stats.skipped_visited += 1;
                continue;
            }
            stats.expanded += 1;

            let successors = problem.successors(&current);
            let next_path = path.record(current);
            for successor in successors {
                if !visited.contains(&successor) {
                    frontier.push_back((successor, next_path.clone()));
                    stats.enqueued += 1;
                }
            }
            stats.peak_frontier = stats.peak_frontier.max(frontier.len());
        }

        stats.finish();
        debug!(
            dequeued = stats.dequeued,
            expanded = stats.expanded,
            "frontier exhausted without reaching a goal"
        );
        SearchReport {
            outcome: SearchOutcome::NoSolution,
            stats,
        }
    }
}

/// Search from `initial` with a fresh [`BreadthFirstSearch`].
pub fn solve<P: SearchProblem>(problem: &P, initial: P::State) -> SearchOutcome<P::State> {
    BreadthFirstSearch::new().run(problem, initial).outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Goal;
    use crate::search::FnProblem;
    use std::collections::HashMap;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    struct Node(u8);

    impl SearchState for Node {}

    /// Small directed graph:
    ///
    /// 0 -> 1, 2
    /// 1 -> 3
    /// 2 -> 3, 4
    /// 3 -> 5
    /// 4 -> 5
    /// 6 (isolated)
    fn graph() -> HashMap<u8, Vec<u8>> {
        HashMap::from([
            (0, vec![1, 2]),
            (1, vec![3]),
            (2, vec![3, 4]),
            (3, vec![5]),
            (4, vec![5]),
        ])
    }

    fn problem(target: u8) -> FnProblem<Node, impl Fn(&Node) -> Vec<Node>> {
        let edges = graph();
        FnProblem::new(Goal::reach(Node(target)), move |n: &Node| {
            edges
                .get(&n.0)
                .map(|next| next.iter().copied().map(Node).collect())
                .unwrap_or_default()
        })
    }

    fn ids(path: &SolutionPath<Node>) -> Vec<u8> {
        path.states().iter().map(|n| n.0).collect()
    }

    #[test]
    fn finds_shortest_path_with_first_tie_break() {
        let outcome = solve(&problem(5), Node(0));
        let path = outcome.path().unwrap();

        assert_eq!(ids(path), vec![0, 1, 3, 5]);
    }

    #[test]
    fn initial_goal_returns_single_state() {
        let outcome = solve(&problem(0), Node(0));

        assert_eq!(ids(outcome.path().unwrap()), vec![0]);
    }

    #[test]
    fn unreachable_goal_is_no_solution() {
        let report = BreadthFirstSearch::new().run(&problem(6), Node(0));

        assert_eq!(report.outcome, SearchOutcome::NoSolution);
        assert_eq!(report.stats.expanded, 6);
    }

    #[test]
    fn duplicate_frontier_entries_are_skipped() {
        // 3 and 5 are both enqueued twice before they are expanded.
        let report = BreadthFirstSearch::new().run(&problem(6), Node(0));

        assert_eq!(report.stats.enqueued, 8);
        assert_eq!(report.stats.dequeued, 8);
        assert_eq!(report.stats.skipped_visited, 2);
    }

    #[test]
    fn self_loops_are_not_enqueued() {
        let looping = FnProblem::new(Goal::reach(Node(9)), |n: &Node| vec![n.clone(), n.clone()]);
        let report = BreadthFirstSearch::new().run(&looping, Node(1));

        assert_eq!(report.outcome, SearchOutcome::NoSolution);
        assert_eq!(report.stats.enqueued, 1);
        assert_eq!(report.stats.expanded, 1);
    }

    #[test]
    fn goal_check_precedes_visited_check() {
        // Node 1 is the goal and also reachable again from itself.
        let problem = FnProblem::new(Goal::reach(Node(1)), |n: &Node| match n.0 {
            0 => vec![Node(1), Node(1)],
            _ => vec![],
        });

        let path = solve(&problem, Node(0)).into_path().unwrap();
        assert_eq!(ids(&path), vec![0, 1]);
    }

    #[test]
    fn outcome_accessors() {
        let solved = solve(&problem(5), Node(0));
        assert!(solved.is_solved());
        assert!(solved.into_path().is_some());

        let unsolved = solve(&problem(6), Node(0));
        assert!(!unsolved.is_solved());
        assert!(unsolved.path().is_none());
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let unsolved: SearchOutcome<Node> = SearchOutcome::NoSolution;
        let json = serde_json::to_value(&unsolved).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "no_solution" }));

        let solved = solve(&problem(2), Node(0));
        let json = serde_json::to_string(&solved).unwrap();
        let back: SearchOutcome<Node> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, solved);
    }
}
