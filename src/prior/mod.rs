//! Prior Estimation
//!
//! Derives, for each question, the empirical probability that a historical
//! candidate answered it correctly. The resulting prior vector feeds the
//! posterior scorer and must be fully materialized before scoring begins.
//!
//! Per-question counts are independent, so estimation parallelizes across
//! questions with no shared mutable state.

use rayon::prelude::*;

use crate::error::{ScoringError, ScoringResult};
use crate::types::Code;
use crate::validate;

/// Estimate per-question priors from a historical response matrix.
///
/// `priors[i]` is the fraction of historical rows whose answer at question
/// `i` equals `answer_key[i]`, so every element lies in [0, 1].
///
/// # Errors
///
/// - [`ScoringError::DivisionByZero`] when the historical matrix is empty.
/// - [`ScoringError::InvalidInput`] when the answer key is empty or any
///   historical row's length differs from the answer key's.
pub fn estimate_priors(
    answer_key: &[Code],
    historical_responses: &[Vec<Code>],
) -> ScoringResult<Vec<f64>> {
    let q = validate::check_answer_key(answer_key)?;
    if historical_responses.is_empty() {
        return Err(ScoringError::DivisionByZero(
            "historical response matrix is empty".to_string(),
        ));
    }
    validate::check_rows(historical_responses, q, "historical response")?;

    let n = historical_responses.len() as f64;
    let priors = (0..q)
        .into_par_iter()
        .map(|i| {
            let correct = historical_responses
                .iter()
                .filter(|row| row[i] == answer_key[i])
                .count();
            correct as f64 / n
        })
        .collect();

    Ok(priors)
}
