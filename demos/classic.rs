//! Classic 8 / 5 / 3 Puzzle
//!
//! This example solves the textbook instance: an 8-litre bucket starts full,
//! and exactly 4 litres must be measured using the 5- and 3-litre buckets.
//!
//! Key concepts:
//! - Building a validated puzzle
//! - Breadth-first search for the fewest pours
//! - Reading the pour taken at each step
//!
//! Run with: cargo run --example classic

use decant::pouring::{BucketState, Puzzle};
use decant::report::SolutionReport;

fn main() {
    println!("=== Classic Water Pouring Puzzle ===\n");

    let puzzle = Puzzle::builder()
        .capacities(8, 5, 3)
        .target(4)
        .build()
        .unwrap();

    println!("Capacities: {}", puzzle.capacities());
    println!("Target: {}", puzzle.target());
    println!("Start: {}\n", BucketState::CLASSIC_START);

    let report = SolutionReport::solve(puzzle, BucketState::CLASSIC_START);
    println!("{}\n", report.render_text(true));

    println!("Search statistics:");
    println!("  states expanded:   {}", report.stats.expanded);
    println!("  entries dequeued:  {}", report.stats.dequeued);
    println!("  duplicates skipped: {}", report.stats.skipped_visited);
    println!("  peak frontier:     {}", report.stats.peak_frontier);

    println!("\n=== Example Complete ===");
}
