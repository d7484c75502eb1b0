//! Violation errors and handling strategies.

use crate::pouring::Bucket;
use thiserror::Error;

/// Reasons a puzzle or starting state is malformed
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("Bucket {bucket} has zero capacity")]
    ZeroCapacity { bucket: Bucket },

    #[error("Target volume must be greater than zero")]
    ZeroTarget,

    #[error("Target {target} exceeds every bucket capacity (largest: {largest})")]
    TargetExceedsCapacities { target: u32, largest: u32 },

    #[error("Bucket {bucket} holds {level} but its capacity is {capacity}")]
    LevelExceedsCapacity {
        bucket: Bucket,
        level: u32,
        capacity: u32,
    },
}

/// Strategy for handling validation violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViolationStrategy {
    /// Refuse to build; every violation is returned to the caller
    #[default]
    Reject,

    /// Build anyway and log each violation as a warning
    WarnAndContinue,
}

/// Join violation messages into one line.
pub fn describe_all(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
