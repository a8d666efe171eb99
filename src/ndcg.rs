//! Normalized Discounted Cumulative Gain at a cutoff.
//!
//! # Formula
//!
//! ```text
//! NDCG@k = DCG(actual[..k]) / IDCG(desired[..k])
//! ```
//!
//! `actual` holds the relevance of each item in the order the system ranked
//! them; `desired` holds the ground-truth relevance values. Each is truncated
//! to `k` on its own, so they need not have the same length. When IDCG is
//! zero (nothing relevant in the ground truth) the score is 0.0.
//!
//! # Example
//!
//! ```rust
//! use rankgain::{DcgFormula, NdcgEvaluator, RankingEvaluator};
//!
//! let ndcg = NdcgEvaluator::new(2).unwrap();
//! assert_eq!(ndcg.metric(), "nDCG@2");
//!
//! let score = ndcg
//!     .evaluate_with(&[1.0, 0.0], &[1.0, 1.0], DcgFormula::Traditional)
//!     .unwrap();
//! assert!((score - 0.5).abs() < 1e-12);
//! ```

use crate::dcg::{dcg, idcg, DcgFormula};
use crate::evaluator::RankingEvaluator;
use crate::{Error, Result};

/// Shortest `actual` list that can be evaluated.
pub const MIN_ACTUAL_LEN: usize = 2;

/// Configuration for [`NdcgEvaluator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NdcgConfig {
    /// Number of leading positions to score. Must be positive.
    pub cutoff: usize,
}

impl Default for NdcgConfig {
    fn default() -> Self {
        Self { cutoff: 10 }
    }
}

/// NDCG@k evaluator.
///
/// Stateless apart from its cutoff, so it is `Copy` and can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NdcgEvaluator {
    cutoff: usize,
}

impl NdcgEvaluator {
    /// Build an evaluator scoring the top `cutoff` positions.
    ///
    /// Returns [`Error::InvalidCutoff`] for a cutoff of zero.
    pub fn new(cutoff: usize) -> Result<Self> {
        if cutoff == 0 {
            return Err(Error::InvalidCutoff(cutoff));
        }
        Ok(Self { cutoff })
    }

    /// Build an evaluator from a config.
    ///
    /// ```rust
    /// use rankgain::{NdcgConfig, NdcgEvaluator, RankingEvaluator};
    ///
    /// let ndcg = NdcgEvaluator::from_config(&NdcgConfig::default()).unwrap();
    /// assert_eq!(ndcg.cutoff(), 10);
    /// ```
    pub fn from_config(config: &NdcgConfig) -> Result<Self> {
        Self::new(config.cutoff)
    }

    /// NDCG@k of `actual` against `desired` with an explicit DCG formula.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] when `actual` has fewer than
    /// [`MIN_ACTUAL_LEN`] elements. The length checked is that of the full
    /// `actual` slice, before truncation to the cutoff. `desired` is not
    /// checked: an empty `desired` yields 0.0.
    pub fn evaluate_with<T: Copy + Into<f64>>(
        &self,
        actual: &[T],
        desired: &[T],
        formula: DcgFormula,
    ) -> Result<f64> {
        if actual.len() < MIN_ACTUAL_LEN {
            return Err(Error::InvalidInput { len: actual.len() });
        }

        let actual_dcg = dcg(self.truncate(actual), formula);
        let ideal_dcg = idcg(self.truncate(desired), formula);

        let score = if ideal_dcg == 0.0 {
            0.0
        } else {
            actual_dcg / ideal_dcg
        };

        tracing::debug!(
            cutoff = self.cutoff,
            formula = formula.name(),
            actual_len = actual.len(),
            desired_len = desired.len(),
            dcg = actual_dcg,
            idcg = ideal_dcg,
            score,
            "evaluated ndcg"
        );

        Ok(score)
    }
}

impl TryFrom<NdcgConfig> for NdcgEvaluator {
    type Error = Error;

    fn try_from(config: NdcgConfig) -> Result<Self> {
        Self::from_config(&config)
    }
}

impl RankingEvaluator for NdcgEvaluator {
    fn cutoff(&self) -> usize {
        self.cutoff
    }

    fn metric(&self) -> String {
        format!("nDCG@{}", self.cutoff)
    }

    /// NDCG@k with the default (modern) formula.
    fn evaluate<T: Copy + Into<f64>>(&self, actual: &[T], desired: &[T]) -> Result<f64> {
        self.evaluate_with(actual, desired, DcgFormula::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ndcg(cutoff: usize) -> NdcgEvaluator {
        NdcgEvaluator::new(cutoff).unwrap()
    }

    #[test]
    fn test_metric_label() {
        assert_eq!(ndcg(5).metric(), "nDCG@5");
        assert_eq!(ndcg(1).metric(), "nDCG@1");
    }

    #[test]
    fn test_zero_cutoff_rejected() {
        assert!(matches!(
            NdcgEvaluator::new(0),
            Err(Error::InvalidCutoff(0))
        ));
        assert!(NdcgEvaluator::try_from(NdcgConfig { cutoff: 0 }).is_err());
        assert_eq!(
            NdcgEvaluator::try_from(NdcgConfig { cutoff: 3 }).unwrap(),
            ndcg(3)
        );
    }

    #[test]
    fn test_modern_perfect_ranking() {
        let score = ndcg(3).evaluate(&[3.0, 2.0, 1.0], &[3.0, 2.0, 1.0]).unwrap();
        assert_relative_eq!(score, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_traditional_half() {
        let score = ndcg(2)
            .evaluate_with(&[1.0, 0.0], &[1.0, 1.0], DcgFormula::Traditional)
            .unwrap();
        assert_relative_eq!(score, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_short_actual_rejected() {
        let err = ndcg(3).evaluate(&[5.0], &[5.0, 3.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { len: 1 }));
        assert_eq!(
            err.to_string(),
            "expecting gains with minimal length of 2, 1 received"
        );

        let empty: [f64; 0] = [];
        assert!(matches!(
            ndcg(3).evaluate_with(&empty, &[1.0], DcgFormula::Traditional),
            Err(Error::InvalidInput { len: 0 })
        ));
    }

    #[test]
    fn test_length_check_uses_untruncated_actual() {
        // Cutoff 1 leaves a single actual gain, but the full list has two.
        let evaluator = ndcg(1);
        for formula in [DcgFormula::Traditional, DcgFormula::Modern] {
            let score = evaluator
                .evaluate_with(&[2.0, 3.0], &[3.0, 2.0], formula)
                .unwrap();
            assert!(score > 0.0 && score < 1.0);
        }
    }

    #[test]
    fn test_zero_ideal_gives_zero() {
        let evaluator = ndcg(3);
        for formula in [DcgFormula::Traditional, DcgFormula::Modern] {
            let score = evaluator
                .evaluate_with(&[3.0, 2.0, 1.0], &[0.0, 0.0, 0.0, 5.0], formula)
                .unwrap();
            assert_eq!(score, 0.0);
        }
    }

    #[test]
    fn test_empty_desired_gives_zero() {
        let empty: [f64; 0] = [];
        for formula in [DcgFormula::Traditional, DcgFormula::Modern] {
            assert_eq!(
                ndcg(3).evaluate_with(&[1.0, 2.0], &empty, formula).unwrap(),
                0.0
            );
        }
    }

    #[test]
    fn test_single_desired() {
        // Modern: actual dcg = 1 + 3/log₂(3), idcg = 1.
        let score = ndcg(5).evaluate(&[1.0, 2.0], &[1.0]).unwrap();
        assert_relative_eq!(score, 1.0 + 3.0 / 3.0_f64.log2(), epsilon = 1e-12);
    }

    #[test]
    fn test_formulas_differ_for_graded_relevance() {
        let evaluator = ndcg(3);
        let actual = [1.0, 2.0, 3.0];
        let desired = [3.0, 2.0, 1.0];

        let traditional = evaluator
            .evaluate_with(&actual, &desired, DcgFormula::Traditional)
            .unwrap();
        let modern = evaluator
            .evaluate_with(&actual, &desired, DcgFormula::Modern)
            .unwrap();

        let trad_dcg = 1.0 + 2.0 + 3.0 / 3.0_f64.log2();
        let trad_idcg = 3.0 + 2.0 + 1.0 / 3.0_f64.log2();
        assert_relative_eq!(traditional, trad_dcg / trad_idcg, epsilon = 1e-12);

        let mod_dcg = 1.0 + 3.0 / 3.0_f64.log2() + 7.0 / 2.0;
        let mod_idcg = 7.0 + 3.0 / 3.0_f64.log2() + 1.0 / 2.0;
        assert_relative_eq!(modern, mod_dcg / mod_idcg, epsilon = 1e-12);

        assert!((traditional - modern).abs() > 0.1);
    }

    #[test]
    fn test_desired_truncated_before_sorting() {
        // Only [0, 1] of desired survives cutoff 2; the trailing 5 never counts.
        let score = ndcg(2)
            .evaluate_with(&[1.0, 0.0], &[0.0, 1.0, 5.0], DcgFormula::Traditional)
            .unwrap();
        assert_relative_eq!(score, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trait_default_is_modern() {
        let evaluator = ndcg(4);
        let actual = [0.0, 2.0, 1.0, 3.0];
        let desired = [3.0, 2.0, 1.0, 0.0];
        assert_eq!(
            evaluator.evaluate(&actual, &desired).unwrap(),
            evaluator
                .evaluate_with(&actual, &desired, DcgFormula::Modern)
                .unwrap()
        );
    }

    #[test]
    fn test_integer_gains() {
        let score = ndcg(3).evaluate(&[3u8, 2, 1], &[3u8, 2, 1]).unwrap();
        assert_relative_eq!(score, 1.0, epsilon = 1e-12);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_json() {
        let config: NdcgConfig = serde_json::from_str(r#"{"cutoff": 7}"#).unwrap();
        assert_eq!(config, NdcgConfig { cutoff: 7 });
        assert_eq!(NdcgEvaluator::from_config(&config).unwrap().metric(), "nDCG@7");

        let formula: DcgFormula = serde_json::from_str(r#""traditional""#).unwrap();
        assert_eq!(formula, DcgFormula::Traditional);
    }
}
