//! Core traits for quantile estimation

use conjugate_core::{Error, Result};
use ordered_float::OrderedFloat;

/// Main trait for empirical quantile estimation
///
/// Implementors only supply the sorted-data methods; the unsorted entry
/// points sort a copy so caller sample collections keep their replicate
/// order (paired comparisons across groups depend on it).
pub trait QuantileEstimator {
    /// Estimate a single quantile from pre-sorted data
    ///
    /// # Arguments
    /// * `sorted_data` - The data sample, already sorted ascending
    /// * `p` - The probability (0.0 to 1.0)
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64>;

    /// Estimate multiple quantiles from pre-sorted data
    fn quantiles_sorted(&self, sorted_data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        ps.iter()
            .map(|&p| self.quantile_sorted(sorted_data, p))
            .collect()
    }

    /// Estimate a single quantile
    fn quantile(&self, data: &[f64], p: f64) -> Result<f64> {
        self.quantile_sorted(&sorted(data)?, p)
    }

    /// Estimate multiple quantiles, sorting once
    fn quantiles(&self, data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        self.quantiles_sorted(&sorted(data)?, ps)
    }

    /// Name of the estimator for diagnostics
    fn name(&self) -> &'static str;
}

/// Sorted copy of `data`
///
/// NaN values make the ordering meaningless for quantiles, so they are
/// rejected rather than pushed to one end.
pub fn sorted(data: &[f64]) -> Result<Vec<f64>> {
    if data.iter().any(|x| x.is_nan()) {
        return Err(Error::Computation(
            "sample collection contains NaN".to_string(),
        ));
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by_key(|&x| OrderedFloat(x));
    Ok(sorted)
}
