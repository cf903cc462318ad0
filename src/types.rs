//! Common Types and Constants
//!
//! Shared data structures used across the scoring pipeline.

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Default final-score scale: scores land in [0, 20]
pub const DEFAULT_MAX_SCALE: f64 = 20.0;

/// Numerical stability epsilon
pub const EPSILON: f64 = 1e-10;

// ==================== Answer Codes ====================

/// Canonical answer code.
///
/// Responses are compared against the answer key for exact equality only;
/// codes are never interpreted arithmetically.
pub type Code = i64;

// ==================== Configuration ====================

/// Grader configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraderOptions {
    /// Upper bound of the final score range (default 20.0).
    /// Must be finite and strictly positive.
    pub max_scale: f64,
}

impl Default for GraderOptions {
    fn default() -> Self {
        Self {
            max_scale: DEFAULT_MAX_SCALE,
        }
    }
}

// ==================== Result Types ====================

/// Per-candidate scoring breakdown
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Final score in [0, max_scale]
    pub score: f64,
    /// Posterior knowledge probability per question, each in [0, 1]
    pub posteriors: Vec<f64>,
}
