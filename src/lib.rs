//! # rankgain
//!
//! Normalized Discounted Cumulative Gain (NDCG) for evaluating rankings.
//!
//! Given the relevance of each item in the order a system ranked them
//! (`actual`) and the ground-truth relevance values (`desired`), NDCG@k
//! measures how close the top k of the ranking comes to the best possible
//! ordering:
//!
//! ```text
//! NDCG@k = DCG(actual[..k]) / IDCG(desired[..k])
//! ```
//!
//! where IDCG is the DCG of `desired` sorted descending. Scores lie in
//! [0, 1] for rankings drawn from the ground truth; a ground truth with no
//! relevant items scores 0.
//!
//! ## DCG Formulas
//!
//! | Formula | Gain | Discount | Use |
//! |---------|------|----------|-----|
//! | [`DcgFormula::Traditional`] | rel | 1, then log₂(p) | Järvelin & Kekäläinen |
//! | [`DcgFormula::Modern`] (default) | 2^rel - 1 | log₂(p + 1) | Graded relevance, web search |
//!
//! ## Quick Start
//!
//! ```rust
//! use rankgain::{DcgFormula, NdcgEvaluator, RankingEvaluator};
//!
//! let ndcg = NdcgEvaluator::new(3).unwrap();
//!
//! // Perfect ranking
//! let score = ndcg.evaluate(&[3.0, 2.0, 1.0], &[3.0, 2.0, 1.0]).unwrap();
//! assert!((score - 1.0).abs() < 1e-12);
//!
//! // Worst item first
//! let score = ndcg.evaluate(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap();
//! assert!(score < 1.0);
//!
//! // Traditional formula
//! let score = ndcg
//!     .evaluate_with(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0], DcgFormula::Traditional)
//!     .unwrap();
//! assert!(score < 1.0);
//!
//! // Too few predictions
//! assert!(ndcg.evaluate(&[1.0], &[1.0, 0.0]).is_err());
//! ```
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`dcg`] | DCG and IDCG under either formula |
//! | [`evaluator`] | The [`RankingEvaluator`] trait |
//! | [`ndcg`] | [`NdcgEvaluator`] and its config |
//! | [`stats`] | [`RunningStats`] for aggregating scores across queries |
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`NdcgConfig`] and [`DcgFormula`].
//!
//! ## Logging
//!
//! Each evaluation emits a `tracing` event at `DEBUG` level carrying the
//! cutoff, formula, input lengths, DCG, IDCG and score. Install a subscriber
//! in the calling application to see them.
//!
//! ## References
//!
//! - Järvelin & Kekäläinen (2002). "Cumulated Gain-Based Evaluation of IR Techniques"
//! - Burges et al. (2005). "Learning to Rank using Gradient Descent"
//! - Wang et al. (2013). "A Theoretical Analysis of NDCG Type Ranking Measures"

pub mod dcg;
pub mod evaluator;
pub mod ndcg;
pub mod stats;

use thiserror::Error;

pub use dcg::{dcg, idcg, DcgFormula};
pub use evaluator::RankingEvaluator;
pub use ndcg::{NdcgConfig, NdcgEvaluator, MIN_ACTUAL_LEN};
pub use stats::RunningStats;

#[derive(Debug, Error)]
pub enum Error {
    #[error("expecting gains with minimal length of 2, {len} received")]
    InvalidInput { len: usize },

    #[error("cutoff must be positive: {0}")]
    InvalidCutoff(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
