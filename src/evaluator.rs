//! The ranking-evaluator interface.
//!
//! A ranking evaluator scores one predicted ranking against its ground truth,
//! looking only at the top `cutoff` positions of each. [`NdcgEvaluator`] is
//! the implementation this crate ships.
//!
//! [`NdcgEvaluator`]: crate::NdcgEvaluator

use crate::Result;

/// A metric that compares a predicted ranking with a desired one at a cutoff.
///
/// Implementors are immutable once built: `cutoff` is fixed at construction,
/// and `evaluate` has no side effects, so one evaluator can be shared across
/// threads and queries.
pub trait RankingEvaluator {
    /// Number of leading positions considered (the `k` in metric@k).
    fn cutoff(&self) -> usize;

    /// Label for reporting, e.g. `"nDCG@10"`.
    fn metric(&self) -> String;

    /// Score `actual` (per-position relevance of the predicted ranking)
    /// against `desired` (ground-truth relevance values).
    fn evaluate<T: Copy + Into<f64>>(&self, actual: &[T], desired: &[T]) -> Result<f64>;

    /// The first `cutoff` elements of `gains`, or all of them if fewer.
    fn truncate<'a, T>(&self, gains: &'a [T]) -> &'a [T] {
        &gains[..gains.len().min(self.cutoff())]
    }
}
