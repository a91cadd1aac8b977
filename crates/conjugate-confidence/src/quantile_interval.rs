//! Equal-tailed intervals from empirical quantiles

use crate::{CredibleInterval, CredibleIntervalEstimator, IntervalLevels};
use conjugate_core::{utils::mean, Result};
use conjugate_quantile::{LinearInterpolation, QuantileEstimator};
use tracing::trace;

/// Credible interval at fixed levels using a quantile estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantileInterval<Q = LinearInterpolation> {
    levels: IntervalLevels,
    estimator: Q,
}

impl QuantileInterval<LinearInterpolation> {
    /// Interval using type-7 quantiles
    pub fn new(levels: IntervalLevels) -> Self {
        Self {
            levels,
            estimator: LinearInterpolation,
        }
    }
}

impl<Q: QuantileEstimator> QuantileInterval<Q> {
    /// Interval using a custom quantile estimator
    pub fn with_estimator(levels: IntervalLevels, estimator: Q) -> Self {
        Self { levels, estimator }
    }
}

impl<Q: QuantileEstimator> CredibleIntervalEstimator for QuantileInterval<Q> {
    fn credible_interval(&self, samples: &[f64]) -> Result<CredibleInterval> {
        let bounds = self
            .estimator
            .quantiles(samples, &self.levels.as_array())?;
        let estimate = mean(samples);
        trace!(
            estimator = self.estimator.name(),
            lower = bounds[0],
            upper = bounds[1],
            "credible interval"
        );
        Ok(CredibleInterval::new(
            bounds[0],
            bounds[1],
            estimate,
            self.levels,
        ))
    }

    fn levels(&self) -> IntervalLevels {
        self.levels
    }
}

/// Type-7 credible interval of `samples` at `levels`
///
/// # Examples
///
/// ```rust
/// use conjugate_confidence::{credible_interval, IntervalLevels};
///
/// let draws: Vec<f64> = (0..=100).map(f64::from).collect();
/// let ci = credible_interval(&draws, IntervalLevels::new(0.1, 0.9).unwrap()).unwrap();
/// assert_eq!(ci.bounds(), [10.0, 90.0]);
/// assert_eq!(ci.estimate, 50.0);
/// ```
pub fn credible_interval(samples: &[f64], levels: IntervalLevels) -> Result<CredibleInterval> {
    QuantileInterval::new(levels).credible_interval(samples)
}
