//! Error types for Youden plot analysis.
//!
//! Every failure is raised eagerly at the boundary, before any numeric
//! stage runs. Degenerate geometry (a laboratory sitting exactly on the
//! median) is handled by zero fallbacks and is never an error.

use thiserror::Error;

/// Errors raised by the Youden analysis pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum YoudenError {
    /// Malformed input: empty matrix, wrong shape, non-numeric or non-finite
    /// cell, mismatched label count, α outside (0, 1), or an unknown
    /// verbosity level. The message names the violated constraint.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Fewer than two observations, so the t quantile has no degrees of
    /// freedom.
    #[error("insufficient data: {observations} observation(s), at least 2 required")]
    InsufficientData {
        /// Number of observations supplied.
        observations: usize,
    },
}

impl YoudenError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, YoudenError>;
