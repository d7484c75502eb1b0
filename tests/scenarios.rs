//! End-to-end puzzle scenarios through the public API.

use decant::config::PuzzleConfig;
use decant::pouring::{BucketState, Capacities, Puzzle, PuzzleError};
use decant::report::SolutionReport;
use decant::search::SearchOutcome;
use decant::validation::ViolationStrategy;

#[test]
fn classic_puzzle_takes_six_pours() {
    let path = Puzzle::classic()
        .solve(BucketState::new(8, 0, 0))
        .into_path()
        .expect("classic puzzle is solvable");

    assert_eq!(path.move_count(), 6);
    assert_eq!(path.initial(), Some(&BucketState::new(8, 0, 0)));
    assert!(path.goal().unwrap().is_goal(4));
    assert_eq!(
        path.render(" -> "),
        "(8, 0, 0) -> (3, 5, 0) -> (3, 2, 3) -> (6, 2, 0) -> (6, 0, 2) -> (1, 5, 2) -> (1, 4, 3)"
    );
}

#[test]
fn target_beyond_every_bucket_has_no_solution() {
    let puzzle = Puzzle::new(Capacities::new(1, 1, 1), 4);

    assert_eq!(
        puzzle.solve(BucketState::new(1, 1, 1)),
        SearchOutcome::NoSolution
    );
    assert!(matches!(
        Puzzle::builder().capacities(1, 1, 1).target(4).build(),
        Err(PuzzleError::InvalidPuzzle(_))
    ));
}

#[test]
fn initial_goal_is_returned_immediately() {
    let report = Puzzle::classic().run(BucketState::new(4, 0, 0));

    assert_eq!(
        report.outcome.path().unwrap().states(),
        &[BucketState::new(4, 0, 0)]
    );
    assert_eq!(report.stats.dequeued, 1);
    assert_eq!(report.stats.expanded, 0);
}

#[test]
fn larger_puzzle_from_config() {
    let config = PuzzleConfig::from_toml_str(
        r#"
        capacities = [12, 7, 4]
        target = 6
        initial = [12, 0, 0]
        "#,
    )
    .unwrap();

    let puzzle = config.puzzle(ViolationStrategy::Reject).unwrap();
    let report = SolutionReport::solve(puzzle, config.initial_state());

    assert!(report.is_solved());
    assert!(report.validate().is_ok());
    assert_eq!(report.pours.len(), report.outcome.path().unwrap().move_count());
}

#[test]
fn report_json_round_trips() {
    let report = SolutionReport::solve(Puzzle::classic(), BucketState::CLASSIC_START);
    let json = report.to_json().unwrap();

    assert_eq!(SolutionReport::from_json(&json).unwrap(), report);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["outcome"]["status"], "solved");
    assert_eq!(value["pours"][0]["from"], "A");
}
