//! Credible interval estimation over sample collections

use crate::types::{CredibleInterval, IntervalLevels};
use conjugate_core::Result;

/// Reduce a sample collection to a credible interval
///
/// The quantile estimator is a type parameter of the implementor rather
/// than a method argument, so one estimator value can be reused across
/// every collection of an analysis.
pub trait CredibleIntervalEstimator {
    /// Calculate the credible interval of `samples`
    fn credible_interval(&self, samples: &[f64]) -> Result<CredibleInterval>;

    /// Probability levels the interval is taken at
    fn levels(&self) -> IntervalLevels;
}
