//! Input Validation
//!
//! Shape and numeric-domain checks shared by both pipeline stages.
//!
//! Checks:
//! - Answer-key and response-row shapes
//! - Unit-interval vectors (difficulties, priors)
//! - Score-scale sanity
//!
//! Malformed input is always rejected with [`ScoringError::InvalidInput`],
//! never corrected or skipped: silently dropping a malformed row would bias
//! the estimate without signaling the caller.

use crate::error::{ScoringError, ScoringResult};
use crate::types::Code;

/// Check whether an array contains invalid values (NaN or Inf).
pub fn has_invalid_values(arr: &[f64]) -> bool {
    arr.iter().any(|&x| x.is_nan() || x.is_infinite())
}

/// Validate the answer key and return the question count Q.
pub fn check_answer_key(answer_key: &[Code]) -> ScoringResult<usize> {
    if answer_key.is_empty() {
        return Err(ScoringError::InvalidInput(
            "answer key is empty".to_string(),
        ));
    }
    Ok(answer_key.len())
}

/// Require every response row to have exactly `q` entries.
pub fn check_rows(rows: &[Vec<Code>], q: usize, label: &str) -> ScoringResult<()> {
    for (i, row) in rows.iter().enumerate() {
        if row.len() != q {
            return Err(ScoringError::InvalidInput(format!(
                "{} row {} has length {}, expected {}",
                label,
                i,
                row.len(),
                q
            )));
        }
    }
    Ok(())
}

/// Require a probability vector: length `q`, every element in [0, 1].
pub fn check_unit_vector(values: &[f64], q: usize, label: &str) -> ScoringResult<()> {
    if values.len() != q {
        return Err(ScoringError::InvalidInput(format!(
            "{} vector has length {}, expected {}",
            label,
            values.len(),
            q
        )));
    }
    if has_invalid_values(values) {
        return Err(ScoringError::InvalidInput(format!(
            "{} vector contains NaN or Inf",
            label
        )));
    }
    for (i, &v) in values.iter().enumerate() {
        if !(0.0..=1.0).contains(&v) {
            return Err(ScoringError::InvalidInput(format!(
                "{} value {} at index {} is outside [0, 1]",
                label, v, i
            )));
        }
    }
    Ok(())
}

/// Require a usable score scale: finite and strictly positive.
pub fn check_max_scale(max_scale: f64) -> ScoringResult<()> {
    if !max_scale.is_finite() || max_scale <= 0.0 {
        return Err(ScoringError::InvalidInput(format!(
            "max_scale {} must be finite and positive",
            max_scale
        )));
    }
    Ok(())
}
