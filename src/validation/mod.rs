//! Validation of puzzle parameters and starting states.
//!
//! Checks use Stillwater's `Validation` type so that a malformed puzzle
//! reports ALL of its problems at once instead of the first one only.
//!
//! # Example
//!
//! ```rust
//! use decant::pouring::Capacities;
//! use decant::validation::{check_puzzle, into_result, Violation};
//!
//! let violations = into_result(check_puzzle(&Capacities::new(0, 5, 3), 9)).unwrap_err();
//!
//! assert_eq!(violations.len(), 2);
//! assert!(violations.contains(&Violation::TargetExceedsCapacities { target: 9, largest: 5 }));
//! ```

pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use rules::{check_capacities, check_puzzle, check_state, check_target, into_result, Checked};
pub use violations::{describe_all, Violation, ViolationStrategy};
