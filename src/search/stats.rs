//! Counters collected during one search run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Bookkeeping for a single search run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Frontier entries taken off the queue, duplicates included
    pub dequeued: usize,
    /// Distinct states whose successors were generated
    pub expanded: usize,
    /// Frontier entries pushed, the initial entry included
    pub enqueued: usize,
    /// Dequeued entries dropped because their state was already expanded
    pub skipped_visited: usize,
    /// Largest frontier length observed
    pub peak_frontier: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl SearchStats {
    /// Fresh counters stamped with the current time.
    pub fn started() -> Self {
        let now = Utc::now();
        Self {
            dequeued: 0,
            expanded: 0,
            enqueued: 0,
            skipped_visited: 0,
            peak_frontier: 0,
            started_at: now,
            finished_at: now,
        }
    }

    pub(crate) fn finish(&mut self) {
        self.finished_at = Utc::now();
    }

    /// Wall-clock time between start and finish.
    ///
    /// Returns zero if the clock went backwards in between.
    pub fn duration(&self) -> Duration {
        self.finished_at
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}
