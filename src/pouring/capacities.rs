//! Bucket capacities.

use super::bucket::Bucket;
use super::state::BucketState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum volume of each bucket.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Capacities {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Capacities {
    /// The 8 / 5 / 3 buckets of the classic puzzle.
    pub const CLASSIC: Capacities = Capacities::new(8, 5, 3);

    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    pub fn of(&self, bucket: Bucket) -> u32 {
        match bucket {
            Bucket::A => self.a,
            Bucket::B => self.b,
            Bucket::C => self.c,
        }
    }

    pub fn largest(&self) -> u32 {
        self.a.max(self.b).max(self.c)
    }

    /// Room left in `bucket` for the given state.
    ///
    /// Saturates at zero for a state that already overflows the bucket.
    pub fn headroom(&self, state: &BucketState, bucket: Bucket) -> u32 {
        self.of(bucket).saturating_sub(state.level(bucket))
    }

    /// True iff every level of `state` fits its bucket.
    pub fn admits(&self, state: &BucketState) -> bool {
        Bucket::ALL
            .into_iter()
            .all(|bucket| state.level(bucket) <= self.of(bucket))
    }

    /// Number of distinct fill configurations, `(a + 1) * (b + 1) * (c + 1)`.
    ///
    /// Upper bound on the states a search can ever expand.
    pub fn state_space_size(&self) -> u128 {
        [self.a, self.b, self.c]
            .into_iter()
            .map(|cap| u128::from(cap) + 1)
            .product()
    }
}

impl From<[u32; 3]> for Capacities {
    fn from([a, b, c]: [u32; 3]) -> Self {
        Self::new(a, b, c)
    }
}

impl fmt::Display for Capacities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.a, self.b, self.c)
    }
}
