//! Discounted Cumulative Gain.
//!
//! DCG sums relevance scores down a ranked list, discounting each one by a
//! logarithm of its (1-indexed) position. IDCG is the DCG of the same scores
//! sorted into the best possible order, which makes it the normalizer for NDCG.
//!
//! # Formulas
//!
//! | Formula | Gain | Discount at position p |
//! |---------|------|------------------------|
//! | [`DcgFormula::Traditional`] | relᵢ | 1 for p = 1, log₂(p) after |
//! | [`DcgFormula::Modern`] | 2^relᵢ - 1 | log₂(p + 1) |
//!
//! ```text
//! Traditional:  DCG = rel₁ + Σᵢ₌₂ⁿ relᵢ / log₂(i)
//! Modern:       DCG = Σᵢ₌₁ⁿ (2^relᵢ - 1) / log₂(i + 1)
//! ```
//!
//! The modern formula (Burges et al. 2005) rewards highly relevant items
//! exponentially, so a single grade-3 hit outweighs several grade-1 hits.
//! For binary relevance (0/1) the two gains coincide.
//!
//! # Example
//!
//! ```rust
//! use rankgain::dcg::{dcg, idcg, DcgFormula};
//!
//! let gains = [3.0, 2.0, 1.0];
//! let d = dcg(&gains, DcgFormula::Modern);
//! // 7/1 + 3/log₂(3) + 1/2
//! assert!((d - 9.392).abs() < 1e-3);
//!
//! // Already in ideal order
//! assert_eq!(d, idcg(&gains, DcgFormula::Modern));
//! ```

/// Which DCG weighting scheme to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DcgFormula {
    /// Linear gain; the first position is undiscounted, position p ≥ 2 is
    /// divided by log₂(p).
    Traditional,
    /// Exponential gain `2^rel - 1` divided by log₂(p + 1).
    #[default]
    Modern,
}

impl DcgFormula {
    /// Map a "use the traditional formula" flag onto a formula.
    ///
    /// ```rust
    /// use rankgain::DcgFormula;
    ///
    /// assert_eq!(DcgFormula::from_traditional(true), DcgFormula::Traditional);
    /// assert_eq!(DcgFormula::from_traditional(false), DcgFormula::Modern);
    /// ```
    pub fn from_traditional(use_traditional: bool) -> Self {
        if use_traditional {
            Self::Traditional
        } else {
            Self::Modern
        }
    }

    /// Short lowercase name, e.g. for log fields.
    pub fn name(self) -> &'static str {
        match self {
            Self::Traditional => "traditional",
            Self::Modern => "modern",
        }
    }
}

/// Discounted Cumulative Gain of `gains` in the given order.
///
/// Position in the slice is rank position. An empty slice has a DCG of 0.0
/// under both formulas.
///
/// # Example
///
/// ```rust
/// use rankgain::dcg::{dcg, DcgFormula};
///
/// // 1 + 0/log₂(2)
/// assert_eq!(dcg(&[1.0, 0.0], DcgFormula::Traditional), 1.0);
/// // 1 + 1/log₂(2)
/// assert_eq!(dcg(&[1.0, 1.0], DcgFormula::Traditional), 2.0);
/// ```
pub fn dcg<T: Copy + Into<f64>>(gains: &[T], formula: DcgFormula) -> f64 {
    match formula {
        DcgFormula::Traditional => {
            let Some((&first, rest)) = gains.split_first() else {
                return 0.0;
            };
            let tail: f64 = rest
                .iter()
                .zip(2usize..)
                .map(|(&gain, position)| {
                    let gain: f64 = gain.into();
                    gain / (position as f64).log2()
                })
                .sum();
            Into::<f64>::into(first) + tail
        }
        DcgFormula::Modern => gains
            .iter()
            .zip(1usize..)
            .map(|(&gain, position)| {
                let gain: f64 = gain.into();
                (gain.exp2() - 1.0) / (position as f64 + 1.0).log2()
            })
            .sum(),
    }
}

/// Ideal DCG: the DCG of `gains` after sorting them in descending order.
///
/// This is the largest DCG any permutation of the same scores can reach.
/// The sort is stable; equal gains contribute the same amount wherever they
/// land, so tie order does not affect the result.
pub fn idcg<T: Copy + Into<f64>>(gains: &[T], formula: DcgFormula) -> f64 {
    let mut sorted: Vec<f64> = gains.iter().map(|&g| Into::<f64>::into(g)).collect();
    sorted.sort_by(|a, b| b.total_cmp(a));
    dcg(&sorted, formula)
}
