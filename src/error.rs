//! Error Types
//!
//! Both pipeline stages fail fast with no partial result: the computation is
//! deterministic, so retrying cannot change the outcome and the caller must
//! supply corrected input.

use thiserror::Error;

/// Scoring pipeline error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// Shape mismatch (row length, vector length) or out-of-range value.
    /// Malformed input is rejected, never silently corrected or skipped.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Degenerate division: empty historical matrix, or a zero marginal
    /// probability in the posterior update.
    #[error("division by zero: {0}")]
    DivisionByZero(String),
}

pub type ScoringResult<T> = Result<T, ScoringError>;
