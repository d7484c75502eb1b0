//! Fill levels of the three buckets.

use super::bucket::Bucket;
use crate::core::SearchState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of how much water each bucket holds.
///
/// Construction does not clamp against capacities; pours produced by
/// [`get_next_states`](super::get_next_states) stay within bounds on their own.
///
/// # Example
///
/// ```rust
/// use decant::pouring::BucketState;
///
/// let state = BucketState::new(1, 4, 3);
/// assert!(state.is_goal(4));
/// assert!(!state.is_goal(2));
/// assert_eq!(state.to_string(), "(1, 4, 3)");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct BucketState {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl BucketState {
    /// The classic starting point: the large bucket full, the others empty.
    pub const CLASSIC_START: BucketState = BucketState::new(8, 0, 0);

    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    /// True iff some bucket holds exactly `target`.
    pub fn is_goal(&self, target: u32) -> bool {
        self.a == target || self.b == target || self.c == target
    }

    pub fn level(&self, bucket: Bucket) -> u32 {
        match bucket {
            Bucket::A => self.a,
            Bucket::B => self.b,
            Bucket::C => self.c,
        }
    }

    /// Copy of this state with one bucket's level replaced.
    pub fn with_level(self, bucket: Bucket, level: u32) -> Self {
        let mut next = self;
        match bucket {
            Bucket::A => next.a = level,
            Bucket::B => next.b = level,
            Bucket::C => next.c = level,
        }
        next
    }

    pub fn levels(&self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }

    /// Total water across all buckets; pours never change it.
    pub fn total(&self) -> u64 {
        u64::from(self.a) + u64::from(self.b) + u64::from(self.c)
    }
}

impl From<[u32; 3]> for BucketState {
    fn from([a, b, c]: [u32; 3]) -> Self {
        Self::new(a, b, c)
    }
}

impl fmt::Display for BucketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.a, self.b, self.c)
    }
}

impl SearchState for BucketState {
    fn describe(&self) -> String {
        self.to_string()
    }
}
