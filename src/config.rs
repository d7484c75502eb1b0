//! Puzzle configuration loaded from TOML.
//!
//! Precedence, lowest first: built-in defaults (the classic 8/5/3 puzzle),
//! the TOML file, then explicit overrides (command-line flags or their
//! environment variables).
//!
//! ```toml
//! capacities = [12, 7, 4]
//! target = 6
//! initial = [12, 0, 0]
//! ```

use crate::pouring::{BucketState, Capacities, Puzzle, PuzzleError};
use crate::report::SolutionReport;
use crate::validation::ViolationStrategy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Expected three comma-separated volumes like `8,5,3`, got `{0}`")]
    InvalidTriple(String),
}

/// Parameters of one puzzle run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PuzzleConfig {
    pub capacities: [u32; 3],
    pub target: u32,
    pub initial: [u32; 3],
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            capacities: [8, 5, 3],
            target: 4,
            initial: [8, 0, 0],
        }
    }
}

impl PuzzleConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Read and parse a TOML file; missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Replace each field for which an override is given.
    pub fn with_overrides(
        mut self,
        capacities: Option<[u32; 3]>,
        target: Option<u32>,
        initial: Option<[u32; 3]>,
    ) -> Self {
        if let Some(v) = capacities {
            self.capacities = v;
        }
        if let Some(v) = target {
            self.target = v;
        }
        if let Some(v) = initial {
            self.initial = v;
        }
        self
    }

    /// Build the configured puzzle, validating it under `strategy`.
    pub fn puzzle(&self, strategy: ViolationStrategy) -> Result<Puzzle, PuzzleError> {
        Puzzle::builder()
            .with_capacities(Capacities::from(self.capacities))
            .target(self.target)
            .on_violation(strategy)
            .build()
    }

    pub fn initial_state(&self) -> BucketState {
        BucketState::from(self.initial)
    }

    /// Validate puzzle and starting state under `strategy`, then solve.
    ///
    /// Under [`ViolationStrategy::WarnAndContinue`] an overfull starting
    /// state is logged and searched anyway.
    pub fn solve(&self, strategy: ViolationStrategy) -> Result<SolutionReport, PuzzleError> {
        let puzzle = self.puzzle(strategy)?;
        let initial = self.initial_state();

        if let Err(error) = puzzle.validate_state(&initial) {
            match strategy {
                ViolationStrategy::Reject => return Err(error),
                ViolationStrategy::WarnAndContinue => warn!(%error, "solving from invalid state"),
            }
        }

        info!(
            capacities = %puzzle.capacities(),
            target = puzzle.target(),
            %initial,
            "solving"
        );
        Ok(SolutionReport::solve(puzzle, initial))
    }
}

/// Parse `"a,b,c"` into three volumes. Whitespace around numbers is ignored.
pub fn parse_triple(raw: &str) -> Result<[u32; 3], ConfigError> {
    let invalid = || ConfigError::InvalidTriple(raw.to_string());

    let values = raw
        .split(',')
        .map(|part| part.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;

    <[u32; 3]>::try_from(values).map_err(|_| invalid())
}
