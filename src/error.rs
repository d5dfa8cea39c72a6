//! Error taxonomy for the puzzle engine.

use derive_more::{Display, Error};

/// Errors raised by puzzle construction and the frontier.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PuzzleError {
    /// `pop_best` was called on an empty worklist.
    #[display("frontier is empty")]
    EmptyFrontier,
    /// A grid that is not a permutation of 0..=8.
    #[display("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong with the grid.
        reason: String,
    },
}

impl PuzzleError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
