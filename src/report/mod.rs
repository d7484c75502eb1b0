//! Serializable summaries of a solved (or unsolvable) puzzle.
//!
//! A report bundles the puzzle, the starting state, the search outcome, the
//! pour taken at every step and the run statistics. It renders as plain text
//! for terminals or as versioned JSON for other tools.

use crate::core::SolutionPath;
use crate::pouring::{pour_between, BucketState, Pour, Puzzle};
use crate::search::{SearchOutcome, SearchReport, SearchStats};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::ReportError;

/// Version identifier for report format
pub const REPORT_VERSION: u32 = 1;

/// Summary of one puzzle run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionReport {
    /// Report format version
    pub version: u32,

    /// When the report was created
    pub generated_at: DateTime<Utc>,

    pub puzzle: Puzzle,

    pub initial: BucketState,

    /// Path to the goal, or the no-solution marker
    pub outcome: SearchOutcome<BucketState>,

    /// Pour taken between each pair of consecutive states
    pub pours: Vec<Pour>,

    pub stats: SearchStats,
}

impl SolutionReport {
    /// Summarize a finished search of `puzzle` from `initial`.
    pub fn new(puzzle: Puzzle, initial: BucketState, report: SearchReport<BucketState>) -> Self {
        let pours = report
            .outcome
            .path()
            .map(|path| pours_along(&puzzle, path))
            .unwrap_or_default();

        Self {
            version: REPORT_VERSION,
            generated_at: Utc::now(),
            puzzle,
            initial,
            outcome: report.outcome,
            pours,
            stats: report.stats,
        }
    }

    /// Solve `puzzle` from `initial` and summarize the run.
    pub fn solve(puzzle: Puzzle, initial: BucketState) -> Self {
        let report = puzzle.run(initial);
        Self::new(puzzle, initial, report)
    }

    pub fn is_solved(&self) -> bool {
        self.outcome.is_solved()
    }

    /// Plain-text rendering: `Solution:` and one state per line, or
    /// `No solution found.`.
    ///
    /// With `show_pours`, each state after the first is followed by the pour
    /// that produced it.
    pub fn render_text(&self, show_pours: bool) -> String {
        let Some(path) = self.outcome.path() else {
            return "No solution found.".to_string();
        };

        let mut lines = vec!["Solution:".to_string()];
        for (i, state) in path.states().iter().enumerate() {
            match i.checked_sub(1).and_then(|step| self.pours.get(step)) {
                Some(pour) if show_pours => lines.push(format!("{state}  [{pour}]")),
                _ => lines.push(state.to_string()),
            }
        }
        lines.join("\n")
    }

    /// Encode as compact JSON.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a report, checking its version and internal consistency.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let report: Self = serde_json::from_str(json)?;

        if report.version != REPORT_VERSION {
            return Err(ReportError::UnsupportedVersion {
                found: report.version,
                supported: REPORT_VERSION,
            });
        }

        report.validate()?;
        Ok(report)
    }

    /// Check that the recorded path starts at `initial`, follows legal pours
    /// and ends at a goal of the puzzle.
    pub fn validate(&self) -> Result<(), ReportError> {
        let Some(path) = self.outcome.path() else {
            return if self.pours.is_empty() {
                Ok(())
            } else {
                Err(ReportError::Inconsistent(
                    "unsolved report lists pours".to_string(),
                ))
            };
        };

        if path.initial() != Some(&self.initial) {
            return Err(ReportError::Inconsistent(format!(
                "path does not start at initial state {}",
                self.initial
            )));
        }

        match path.goal() {
            Some(goal) if self.puzzle.is_goal(goal) => {}
            _ => {
                return Err(ReportError::Inconsistent(
                    "path does not end at a goal state".to_string(),
                ))
            }
        }

        if pours_along(&self.puzzle, path) != self.pours || self.pours.len() != path.move_count()
        {
            return Err(ReportError::Inconsistent(
                "recorded pours do not match the path".to_string(),
            ));
        }

        Ok(())
    }
}

fn pours_along(puzzle: &Puzzle, path: &SolutionPath<BucketState>) -> Vec<Pour> {
    path.steps()
        .filter_map(|(from, to)| pour_between(from, to, &puzzle.capacities()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pouring::{Bucket, Capacities};

    fn classic() -> SolutionReport {
        SolutionReport::solve(Puzzle::classic(), BucketState::CLASSIC_START)
    }

    #[test]
    fn solved_report_lists_pours() {
        let report = classic();

        assert!(report.is_solved());
        assert_eq!(report.pours.len(), 6);
        assert_eq!(report.pours[0], Pour::new(Bucket::A, Bucket::B));
        assert_eq!(report.pours[1], Pour::new(Bucket::B, Bucket::C));
    }

    #[test]
    fn text_rendering_matches_classic_output() {
        let text = classic().render_text(false);

        assert_eq!(
            text,
            "Solution:\n(8, 0, 0)\n(3, 5, 0)\n(3, 2, 3)\n(6, 2, 0)\n(6, 0, 2)\n(1, 5, 2)\n(1, 4, 3)"
        );
    }

    #[test]
    fn text_rendering_with_pours() {
        let text = classic().render_text(true);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "(8, 0, 0)");
        assert_eq!(lines[2], "(3, 5, 0)  [A -> B]");
        assert_eq!(lines[7], "(1, 4, 3)  [B -> C]");
    }

    #[test]
    fn unsolved_report_renders_marker() {
        let report =
            SolutionReport::solve(Puzzle::new(Capacities::new(1, 1, 1), 4), BucketState::new(1, 0, 0));

        assert!(!report.is_solved());
        assert!(report.pours.is_empty());
        assert_eq!(report.render_text(true), "No solution found.");
    }

    #[test]
    fn json_roundtrip_preserves_report() {
        let report = classic();

        let json = report.to_json().unwrap();
        let restored = SolutionReport::from_json(&json).unwrap();
        assert_eq!(restored, report);

        let pretty = report.to_json_pretty().unwrap();
        assert_eq!(SolutionReport::from_json(&pretty).unwrap(), report);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut report = classic();
        report.version = REPORT_VERSION + 1;
        let json = report.to_json().unwrap();

        let err = SolutionReport::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            ReportError::UnsupportedVersion { found, supported }
                if found == REPORT_VERSION + 1 && supported == REPORT_VERSION
        ));
    }

    #[test]
    fn tampered_path_fails_validation() {
        let mut report = classic();
        report.initial = BucketState::new(0, 5, 3);
        let json = report.to_json().unwrap();

        let err = SolutionReport::from_json(&json).unwrap_err();
        assert!(matches!(err, ReportError::Inconsistent(_)));
    }

    #[test]
    fn tampered_pours_fail_validation() {
        let mut report = classic();
        report.pours.swap(0, 1);

        assert!(matches!(
            report.validate(),
            Err(ReportError::Inconsistent(_))
        ));
    }

    #[test]
    fn garbage_json_is_a_json_error() {
        let err = SolutionReport::from_json("{not json").unwrap_err();
        assert!(matches!(err, ReportError::Json(_)));
    }
}
