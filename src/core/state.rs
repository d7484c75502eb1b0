//! Core trait for values explored by the search engine.
//!
//! Search states are plain values: two states are the same node of the
//! search graph exactly when they compare equal, so they can key the
//! visited set directly.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for states of a search graph.
///
/// States are immutable values. Equality and hashing must be structural so
/// that a state reached along two different paths is recognised as one node.
///
/// # Required Traits
///
/// - `Clone`: states are copied into every path that passes through them
/// - `Eq` + `Hash`: states key the visited set
/// - `Debug`: states are debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states appear in serialized reports
///
/// # Example
///
/// ```rust
/// use decant::core::SearchState;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// struct Position(i32, i32);
///
/// impl SearchState for Position {
///     fn describe(&self) -> String {
///         format!("<{}, {}>", self.0, self.1)
///     }
/// }
///
/// assert_eq!(Position(1, -2).describe(), "<1, -2>");
/// ```
pub trait SearchState:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Human-readable rendering used in reports and log events.
    ///
    /// Default implementation falls back to the `Debug` output.
    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    struct Counter(u8);

    impl SearchState for Counter {}

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    struct Pair(u8, u8);

    impl SearchState for Pair {
        fn describe(&self) -> String {
            format!("({}, {})", self.0, self.1)
        }
    }

    #[test]
    fn describe_defaults_to_debug() {
        assert_eq!(Counter(3).describe(), "Counter(3)");
    }

    #[test]
    fn describe_can_be_overridden() {
        assert_eq!(Pair(4, 1).describe(), "(4, 1)");
    }

    #[test]
    fn equal_values_collapse_in_a_set() {
        let mut seen = HashSet::new();
        assert!(seen.insert(Pair(1, 2)));
        assert!(!seen.insert(Pair(1, 2)));
        assert!(seen.insert(Pair(2, 1)));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = Pair(7, 0);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: Pair = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
