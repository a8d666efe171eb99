//! Running aggregates over per-query scores.
//!
//! An evaluation run scores many queries one at a time and reports the mean
//! (and spread) of the metric. [`RunningStats`] accumulates those values in a
//! single pass without keeping them around.
//!
//! # Example
//!
//! ```rust
//! use rankgain::{NdcgEvaluator, RankingEvaluator, RunningStats};
//!
//! let ndcg = NdcgEvaluator::new(3).unwrap();
//! let queries = [
//!     (vec![3.0, 2.0, 1.0], vec![3.0, 2.0, 1.0]),
//!     (vec![0.0, 0.0, 1.0], vec![1.0, 0.0, 0.0]),
//! ];
//!
//! let mut stats = RunningStats::new();
//! for (actual, desired) in &queries {
//!     stats.push(ndcg.evaluate(actual, desired).unwrap());
//! }
//!
//! assert_eq!(stats.count(), 2);
//! assert!(stats.mean() > 0.5 && stats.mean() < 1.0);
//! ```

/// Count, mean and variance of a stream of values (Welford's algorithm).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningStats {
    count: usize,
    mean: f64,
    // Sum of squared deviations from the current mean.
    m2: f64,
}

impl RunningStats {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one value.
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    /// Fold another accumulator into this one (Chan et al. pairwise update).
    ///
    /// Lets callers score disjoint batches independently and combine them.
    pub fn merge(&mut self, other: &RunningStats) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = *other;
            return;
        }

        let count = self.count + other.count;
        let delta = other.mean - self.mean;
        let (n_a, n_b, n) = (self.count as f64, other.count as f64, count as f64);

        self.mean += delta * n_b / n;
        self.m2 += other.m2 + delta * delta * n_a * n_b / n;
        self.count = count;
    }

    /// Number of values seen.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean of the values, 0.0 if none.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance, 0.0 if none.
    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }

    /// Population standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// One-line report, e.g. `nDCG@10: mean=0.8123 std=0.1002 n=50`.
    pub fn summary(&self, label: &str) -> String {
        format!(
            "{}: mean={:.4} std={:.4} n={}",
            label,
            self.mean(),
            self.std_dev(),
            self.count
        )
    }
}

impl Extend<f64> for RunningStats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<f64> for RunningStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}
