//! Bucket identifiers and pour directions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three buckets of the puzzle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Bucket {
    A,
    B,
    C,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::A, Bucket::B, Bucket::C];
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        };
        f.write_str(name)
    }
}

/// A pour from one bucket into a different one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Pour {
    pub from: Bucket,
    pub to: Bucket,
}

impl Pour {
    /// Every pour, in the order successors are generated.
    ///
    /// The order decides which of several equally short solutions a search
    /// reports, so it must stay fixed.
    pub const ALL: [Pour; 6] = [
        Pour::new(Bucket::A, Bucket::B),
        Pour::new(Bucket::A, Bucket::C),
        Pour::new(Bucket::B, Bucket::A),
        Pour::new(Bucket::B, Bucket::C),
        Pour::new(Bucket::C, Bucket::A),
        Pour::new(Bucket::C, Bucket::B),
    ];

    pub const fn new(from: Bucket, to: Bucket) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Pour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_pours_are_distinct_ordered_pairs() {
        let unique: HashSet<_> = Pour::ALL.iter().collect();
        assert_eq!(unique.len(), 6);
        assert!(Pour::ALL.iter().all(|p| p.from != p.to));
    }

    #[test]
    fn pour_order_is_fixed() {
        let rendered: Vec<String> = Pour::ALL.iter().map(Pour::to_string).collect();
        assert_eq!(
            rendered,
            vec!["A -> B", "A -> C", "B -> A", "B -> C", "C -> A", "C -> B"]
        );
    }
}
