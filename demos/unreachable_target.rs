//! Unreachable Targets
//!
//! This example shows the two ways a target can be out of reach:
//! - the validating builder refuses a target larger than every bucket
//! - buckets of even size can never measure an odd volume, which only an
//!   exhaustive search discovers
//!
//! Run with: cargo run --example unreachable_target

use decant::pouring::{BucketState, Capacities, Puzzle};
use decant::search::SearchOutcome;

fn main() {
    println!("=== Unreachable Targets ===\n");

    match Puzzle::builder().capacities(1, 1, 1).target(4).build() {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e) => println!("Builder rejected 1/1/1 with target 4:\n  {e}\n"),
    }

    let puzzle = Puzzle::new(Capacities::new(6, 4, 2), 3);
    let report = puzzle.run(BucketState::new(6, 0, 0));

    match report.outcome {
        SearchOutcome::Solved(path) => println!("Found {}", path.render(" -> ")),
        SearchOutcome::NoSolution => println!(
            "6/4/2 with target 3: no solution after expanding {} states",
            report.stats.expanded
        ),
    }

    println!("\n=== Example Complete ===");
}
