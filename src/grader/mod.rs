//! End-to-End Grading
//!
//! Convenience pipeline for callers holding all four inputs: estimates the
//! prior vector from the historical cohort exactly once, then scores every
//! current candidate against it. The prior vector is fully materialized
//! before any candidate is scored.

use crate::error::ScoringResult;
use crate::posterior;
use crate::prior;
use crate::types::{Code, GraderOptions, ScoreBreakdown};

/// Two-stage Bayesian grader
///
/// Usage scenarios:
/// - One-call grading when historical and current cohorts arrive together
/// - Repeated grading under a non-default score scale
///
/// Callers that grade several current cohorts against the same historical
/// data can instead call [`prior::estimate_priors`] once and reuse the
/// prior vector with [`posterior::score_candidates`].
#[derive(Clone, Debug)]
pub struct BayesGrader {
    options: GraderOptions,
}

impl BayesGrader {
    /// Create a grader with the default 0–20 score scale.
    pub fn new() -> Self {
        Self::with_options(GraderOptions::default())
    }

    /// Create a grader with explicit options.
    pub fn with_options(options: GraderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GraderOptions {
        &self.options
    }

    /// Grade every current candidate, returning one final score per row.
    pub fn grade(
        &self,
        answer_key: &[Code],
        difficulties: &[f64],
        historical_responses: &[Vec<Code>],
        current_responses: &[Vec<Code>],
    ) -> ScoringResult<Vec<f64>> {
        let priors = prior::estimate_priors(answer_key, historical_responses)?;
        posterior::score_candidates(
            answer_key,
            difficulties,
            current_responses,
            &priors,
            self.options.max_scale,
        )
    }

    /// Grade every current candidate, returning per-question breakdowns.
    pub fn grade_detailed(
        &self,
        answer_key: &[Code],
        difficulties: &[f64],
        historical_responses: &[Vec<Code>],
        current_responses: &[Vec<Code>],
    ) -> ScoringResult<Vec<ScoreBreakdown>> {
        let priors = prior::estimate_priors(answer_key, historical_responses)?;
        posterior::score_candidates_detailed(
            answer_key,
            difficulties,
            current_responses,
            &priors,
            self.options.max_scale,
        )
    }
}

impl Default for BayesGrader {
    fn default() -> Self {
        Self::new()
    }
}
