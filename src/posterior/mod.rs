//! Posterior Scoring
//!
//! Independent-questions Bayesian update, per candidate and per question:
//!
//! 1. Likelihood `p_ba` that the observed answer is consistent with having
//!    the knowledge: `1 - d` for a correct answer on a question of
//!    difficulty `d`, `d` for an incorrect one. A correct answer is most
//!    informative on an easy question.
//! 2. Marginal `p_b = p_ba * prior + (1 - p_ba) * (1 - prior)`.
//! 3. Posterior `p_ab = p_ba * prior / p_b`.
//! 4. Final score = mean posterior across questions, scaled to
//!    `[0, max_scale]` (equal weight per question).
//!
//! Candidates are independent given the prior vector, so scoring
//! parallelizes across candidates with no ordering requirement.

use rayon::prelude::*;

use crate::error::{ScoringError, ScoringResult};
use crate::types::{Code, ScoreBreakdown, EPSILON};
use crate::validate;

/// Posterior knowledge probability for one observed answer.
///
/// The marginal is non-negative; it vanishes only when a degenerate prior
/// (exactly 0 or 1) meets the complementary likelihood, which is surfaced
/// as [`ScoringError::DivisionByZero`] rather than propagated as NaN.
fn question_posterior(
    correct: bool,
    difficulty: f64,
    prior: f64,
    candidate: usize,
    question: usize,
) -> ScoringResult<f64> {
    let p_ba = if correct { 1.0 - difficulty } else { difficulty };
    let p_b = p_ba * prior + (1.0 - p_ba) * (1.0 - prior);
    if p_b < EPSILON {
        return Err(ScoringError::DivisionByZero(format!(
            "zero marginal probability for candidate {} at question {}",
            candidate, question
        )));
    }
    Ok(p_ba * prior / p_b)
}

fn score_row(
    answer_key: &[Code],
    difficulties: &[f64],
    priors: &[f64],
    row: &[Code],
    candidate: usize,
    max_scale: f64,
) -> ScoringResult<ScoreBreakdown> {
    let q = answer_key.len();
    let mut posteriors = Vec::with_capacity(q);
    for i in 0..q {
        let correct = row[i] == answer_key[i];
        posteriors.push(question_posterior(
            correct,
            difficulties[i],
            priors[i],
            candidate,
            i,
        )?);
    }
    let score = posteriors.iter().sum::<f64>() / q as f64 * max_scale;
    Ok(ScoreBreakdown { score, posteriors })
}

/// Score every current candidate, returning per-question breakdowns.
///
/// Output order matches the input row order.
///
/// # Errors
///
/// - [`ScoringError::InvalidInput`] on any shape mismatch, a difficulty or
///   prior outside [0, 1], or a non-positive/non-finite `max_scale`.
/// - [`ScoringError::DivisionByZero`] when a zero marginal probability is
///   encountered (degenerate prior with complementary likelihood).
pub fn score_candidates_detailed(
    answer_key: &[Code],
    difficulties: &[f64],
    current_responses: &[Vec<Code>],
    priors: &[f64],
    max_scale: f64,
) -> ScoringResult<Vec<ScoreBreakdown>> {
    let q = validate::check_answer_key(answer_key)?;
    validate::check_unit_vector(difficulties, q, "difficulty")?;
    validate::check_unit_vector(priors, q, "prior")?;
    validate::check_rows(current_responses, q, "current response")?;
    validate::check_max_scale(max_scale)?;

    current_responses
        .par_iter()
        .enumerate()
        .map(|(candidate, row)| {
            score_row(answer_key, difficulties, priors, row, candidate, max_scale)
        })
        .collect()
}

/// Score every current candidate, returning only the final scores.
///
/// Thin projection of [`score_candidates_detailed`]: same validation, same
/// errors, same ordering.
pub fn score_candidates(
    answer_key: &[Code],
    difficulties: &[f64],
    current_responses: &[Vec<Code>],
    priors: &[f64],
    max_scale: f64,
) -> ScoringResult<Vec<f64>> {
    let breakdowns = score_candidates_detailed(
        answer_key,
        difficulties,
        current_responses,
        priors,
        max_scale,
    )?;
    Ok(breakdowns.into_iter().map(|b| b.score).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_MAX_SCALE;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_half_priors_half_difficulties_perfect_candidate() {
        // p_ba = 0.5, p_b = 0.5, p_ab = 0.5 for every question, so the
        // final score is exactly half the scale.
        let answer_key = vec![2, 1, 3, 4];
        let difficulties = vec![0.5; 4];
        let priors = vec![0.5; 4];
        let current = vec![answer_key.clone()];

        let scores =
            score_candidates(&answer_key, &difficulties, &current, &priors, DEFAULT_MAX_SCALE)
                .unwrap();
        assert_eq!(scores.len(), 1);
        assert!((scores[0] - 10.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_single_question_known_values() {
        // correct, d = 0.2, prior = 0.75:
        // p_ba = 0.8, p_b = 0.8*0.75 + 0.2*0.25 = 0.65, p_ab = 0.6/0.65
        let scores = score_candidates(&[2], &[0.2], &[vec![2]], &[0.75], 20.0).unwrap();
        let expected = (0.8 * 0.75 / 0.65) * 20.0;
        assert!((scores[0] - expected).abs() < TOLERANCE);

        // incorrect answer on the same question: p_ba = 0.2,
        // p_b = 0.2*0.75 + 0.8*0.25 = 0.35, p_ab = 0.15/0.35
        let scores = score_candidates(&[2], &[0.2], &[vec![3]], &[0.75], 20.0).unwrap();
        let expected = (0.2 * 0.75 / 0.35) * 20.0;
        assert!((scores[0] - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_scores_within_scale() {
        let answer_key = vec![1, 2, 3, 4, 1];
        let difficulties = vec![0.1, 0.3, 0.5, 0.7, 0.9];
        let priors = vec![0.2, 0.4, 0.5, 0.6, 0.8];
        let current = vec![
            vec![1, 2, 3, 4, 1],
            vec![4, 3, 2, 1, 4],
            vec![1, 2, 1, 1, 1],
        ];
        let scores =
            score_candidates(&answer_key, &difficulties, &current, &priors, 20.0).unwrap();
        for &s in &scores {
            assert!((0.0..=20.0).contains(&s), "score {} out of range", s);
        }
    }

    #[test]
    fn test_custom_max_scale() {
        let scores = score_candidates(&[1], &[0.5], &[vec![1]], &[0.5], 100.0).unwrap();
        assert!((scores[0] - 50.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_detailed_and_plain_agree() {
        let answer_key = vec![2, 1, 3];
        let difficulties = vec![0.2, 0.4, 0.6];
        let priors = vec![0.5, 0.3, 0.7];
        let current = vec![vec![2, 1, 3], vec![1, 1, 1]];

        let detailed =
            score_candidates_detailed(&answer_key, &difficulties, &current, &priors, 20.0)
                .unwrap();
        let plain =
            score_candidates(&answer_key, &difficulties, &current, &priors, 20.0).unwrap();

        assert_eq!(detailed.len(), plain.len());
        for (breakdown, &score) in detailed.iter().zip(plain.iter()) {
            assert_eq!(breakdown.score, score);
            assert_eq!(breakdown.posteriors.len(), answer_key.len());
            for &p in &breakdown.posteriors {
                assert!((0.0..=1.0).contains(&p));
            }
        }
    }

    #[test]
    fn test_idempotence() {
        let answer_key = vec![2, 1, 3];
        let difficulties = vec![0.2, 0.4, 0.6];
        let priors = vec![0.5, 0.3, 0.7];
        let current = vec![vec![2, 2, 3], vec![2, 1, 1]];

        let first =
            score_candidates(&answer_key, &difficulties, &current, &priors, 20.0).unwrap();
        let second =
            score_candidates(&answer_key, &difficulties, &current, &priors, 20.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_output_order_matches_input_order() {
        // One easy giveaway question; the correct candidate must land at
        // the same index as its row.
        let answer_key = vec![5];
        let difficulties = vec![0.1];
        let priors = vec![0.5];
        let current = vec![vec![4], vec![5], vec![4]];
        let scores =
            score_candidates(&answer_key, &difficulties, &current, &priors, 20.0).unwrap();
        assert!(scores[1] > scores[0]);
        assert_eq!(scores[0], scores[2]);
    }

    #[test]
    fn test_no_candidates_gives_empty_scores() {
        let scores = score_candidates(&[1, 2], &[0.5, 0.5], &[], &[0.5, 0.5], 20.0).unwrap();
        assert!(scores.is_empty());
    }

    #[test]
    fn test_degenerate_prior_is_division_by_zero() {
        // prior = 1.0 with a wrong answer on a trivial question: p_ba = 0,
        // marginal = 0.
        let err = score_candidates(&[1], &[0.0], &[vec![2]], &[1.0], 20.0).unwrap_err();
        match err {
            ScoringError::DivisionByZero(msg) => {
                assert!(msg.contains("candidate 0"));
                assert!(msg.contains("question 0"));
            }
            other => panic!("expected DivisionByZero, got {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_zero_prior_is_division_by_zero() {
        // prior = 0.0 with a correct answer on a trivial question: p_ba = 1,
        // marginal = 0.
        let err = score_candidates(&[1], &[0.0], &[vec![1]], &[0.0], 20.0).unwrap_err();
        assert!(matches!(err, ScoringError::DivisionByZero(_)));
    }

    #[test]
    fn test_wrong_row_length_is_invalid_input() {
        let err =
            score_candidates(&[1, 2], &[0.5, 0.5], &[vec![1]], &[0.5, 0.5], 20.0).unwrap_err();
        assert!(matches!(err, ScoringError::InvalidInput(_)));
    }

    #[test]
    fn test_difficulty_out_of_range_is_invalid_input() {
        let err = score_candidates(&[1], &[1.5], &[vec![1]], &[0.5], 20.0).unwrap_err();
        assert!(matches!(err, ScoringError::InvalidInput(_)));
    }

    #[test]
    fn test_difficulty_length_mismatch_is_invalid_input() {
        let err =
            score_candidates(&[1, 2], &[0.5], &[vec![1, 2]], &[0.5, 0.5], 20.0).unwrap_err();
        assert!(matches!(err, ScoringError::InvalidInput(_)));
    }

    #[test]
    fn test_prior_out_of_range_is_invalid_input() {
        let err = score_candidates(&[1], &[0.5], &[vec![1]], &[-0.2], 20.0).unwrap_err();
        assert!(matches!(err, ScoringError::InvalidInput(_)));
    }

    #[test]
    fn test_bad_max_scale_is_invalid_input() {
        let err = score_candidates(&[1], &[0.5], &[vec![1]], &[0.5], 0.0).unwrap_err();
        assert!(matches!(err, ScoringError::InvalidInput(_)));
        let err = score_candidates(&[1], &[0.5], &[vec![1]], &[0.5], f64::NAN).unwrap_err();
        assert!(matches!(err, ScoringError::InvalidInput(_)));
    }
}
