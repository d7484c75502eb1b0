//! Errors raised while encoding or decoding a [`SolutionReport`](super::SolutionReport).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Malformed report JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Report format {found} cannot be read, expected {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Path, pours and puzzle disagree with each other
    #[error("Report does not describe a valid solution: {0}")]
    Inconsistent(String),
}
