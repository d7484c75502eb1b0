//! Validation rules for puzzle parameters using Validation.

use crate::pouring::{Bucket, BucketState, Capacities};
use crate::validation::violations::Violation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a rule: success, or every violation found.
pub type Checked = Validation<(), NonEmptyVec<Violation>>;

fn require(ok: bool, violation: impl FnOnce() -> Violation) -> Checked {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Every bucket must hold something.
pub fn check_capacities(capacities: &Capacities) -> Checked {
    let checks: Vec<Checked> = Bucket::ALL
        .into_iter()
        .map(|bucket| {
            require(capacities.of(bucket) > 0, || Violation::ZeroCapacity {
                bucket,
            })
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

/// The target must be positive and fit in at least one bucket.
pub fn check_target(capacities: &Capacities, target: u32) -> Checked {
    let largest = capacities.largest();
    let checks = vec![
        require(target > 0, || Violation::ZeroTarget),
        require(target <= largest, || Violation::TargetExceedsCapacities {
            target,
            largest,
        }),
    ];

    Validation::all_vec(checks).map(|_| ())
}

/// Every level of `state` must fit its bucket.
pub fn check_state(capacities: &Capacities, state: &BucketState) -> Checked {
    let checks: Vec<Checked> = Bucket::ALL
        .into_iter()
        .map(|bucket| {
            let level = state.level(bucket);
            let capacity = capacities.of(bucket);
            require(level <= capacity, || Violation::LevelExceedsCapacity {
                bucket,
                level,
                capacity,
            })
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

/// Capacity and target rules together, accumulating ALL violations.
pub fn check_puzzle(capacities: &Capacities, target: u32) -> Checked {
    Validation::all_vec(vec![
        check_capacities(capacities),
        check_target(capacities, target),
    ])
    .map(|_| ())
}

/// Flatten a [`Checked`] into a `Result` carrying the violations.
pub fn into_result(checked: Checked) -> Result<(), Vec<Violation>> {
    match checked {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}
