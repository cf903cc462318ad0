//! # bayes-grader - Bayesian quiz-scoring core
//!
//! Pure-Rust implementation of a two-stage Bayesian grading pipeline:
//!
//! - **Prior Estimation** - per-question empirical correct-response rates
//!   from a historical cohort
//! - **Posterior Scoring** - per-candidate knowledge posteriors combining
//!   prior, question difficulty, and observed correctness
//!
//! ## Design goals
//!
//! - **Pure functions** - no I/O, no global state; all inputs are explicit
//!   arguments and all results are returned values
//! - **Fail fast** - shape mismatches and degenerate probabilities surface
//!   as typed errors, never as silently skipped rows or NaN scores
//! - **Deterministic** - identical inputs always yield identical scores
//! - **Parallel** - candidates (and per-question counts) are independent,
//!   so both stages use data-parallel maps
//!
//! ## Module structure
//!
//! - [`prior`] - prior estimation from historical responses
//! - [`posterior`] - posterior scoring of current candidates
//! - [`grader`] - end-to-end pipeline ([`BayesGrader`])
//! - [`validate`] - input shape and numeric-domain checks
//! - [`error`] - error taxonomy ([`ScoringError`])
//! - [`types`] - public types and constants
//!
//! ## Usage
//!
//! ```rust
//! use bayes_grader::{estimate_priors, score_candidates};
//!
//! let answer_key = vec![2, 1, 3];
//! let historical = vec![vec![2, 1, 3], vec![2, 2, 3]];
//! let priors = estimate_priors(&answer_key, &historical).unwrap();
//! assert_eq!(priors, vec![1.0, 0.5, 1.0]);
//!
//! let difficulties = vec![0.2, 0.1, 0.3];
//! let current = vec![vec![2, 1, 3]];
//! let scores = score_candidates(&answer_key, &difficulties, &current, &priors, 20.0).unwrap();
//! assert_eq!(scores.len(), 1);
//! assert!(scores[0] > 0.0 && scores[0] <= 20.0);
//! ```

pub mod error;
pub mod grader;
pub mod posterior;
pub mod prior;
pub mod types;
pub mod validate;

pub use error::{ScoringError, ScoringResult};
pub use grader::BayesGrader;
pub use posterior::{score_candidates, score_candidates_detailed};
pub use prior::estimate_priors;
pub use types::{Code, GraderOptions, ScoreBreakdown, DEFAULT_MAX_SCALE, EPSILON};
