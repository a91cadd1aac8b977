//! Linear-interpolation quantiles (Hyndman-Fan type 7)
//!
//! For sorted data `x[0..n]` and probability `p`, let `h = (n - 1) p`.
//! The estimate is `x[⌊h⌋] + (h - ⌊h⌋) (x[⌊h⌋ + 1] - x[⌊h⌋])`, which
//! returns the minimum at `p = 0` and the maximum at `p = 1`.

use crate::traits::QuantileEstimator;
use conjugate_core::{Error, Result};

/// Type-7 empirical quantile estimator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearInterpolation;

impl LinearInterpolation {
    /// Create a new estimator
    pub fn new() -> Self {
        Self
    }
}

impl QuantileEstimator for LinearInterpolation {
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        if sorted_data.is_empty() {
            return Err(Error::InvalidDataVector(
                "cannot compute quantile of empty data".to_string(),
            ));
        }
        Error::check_probability(p)?;

        let n = sorted_data.len();
        if n == 1 {
            return Ok(sorted_data[0]);
        }

        let h = (n - 1) as f64 * p;
        let lo = h.floor() as usize;
        if lo >= n - 1 {
            return Ok(sorted_data[n - 1]);
        }
        let frac = h - lo as f64;
        Ok(sorted_data[lo] + frac * (sorted_data[lo + 1] - sorted_data[lo]))
    }

    fn name(&self) -> &'static str {
        "linear-interpolation (type 7)"
    }
}

/// Convenience: type-7 quantiles of unsorted data
///
/// # Examples
///
/// ```rust
/// use conjugate_quantile::quantiles;
///
/// let q = quantiles(&[4.0, 1.0, 3.0, 2.0], &[0.0, 0.5, 1.0]).unwrap();
/// assert_eq!(q, vec![1.0, 2.5, 4.0]);
/// ```
pub fn quantiles(data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
    LinearInterpolation.quantiles(data, ps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_matches_type7_reference_values() {
        // Reference values from the standard type-7 definition
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let q = LinearInterpolation;
        assert_relative_eq!(q.quantile(&data, 0.025).unwrap(), 1.225, epsilon = 1e-12);
        assert_relative_eq!(q.quantile(&data, 0.25).unwrap(), 3.25, epsilon = 1e-12);
        assert_relative_eq!(q.quantile(&data, 0.5).unwrap(), 5.5, epsilon = 1e-12);
        assert_relative_eq!(q.quantile(&data, 0.975).unwrap(), 9.775, epsilon = 1e-12);
    }

    #[test]
    fn test_endpoints_and_single() {
        let q = LinearInterpolation;
        let data = [3.0, -1.0, 7.0];
        assert_eq!(q.quantile(&data, 0.0).unwrap(), -1.0);
        assert_eq!(q.quantile(&data, 1.0).unwrap(), 7.0);
        assert_eq!(q.quantile(&[42.0], 0.3).unwrap(), 42.0);
    }

    #[test]
    fn test_does_not_reorder_input() {
        let data = vec![5.0, 1.0, 3.0];
        let _ = LinearInterpolation.quantiles(&data, &[0.5]).unwrap();
        assert_eq!(data, vec![5.0, 1.0, 3.0]);
    }

    #[test]
    fn test_errors() {
        let q = LinearInterpolation;
        assert!(matches!(
            q.quantile(&[], 0.5),
            Err(Error::InvalidDataVector(_))
        ));
        assert!(matches!(
            q.quantile(&[1.0], 1.5),
            Err(Error::InvalidProbability { .. })
        ));
        assert!(matches!(
            q.quantile(&[1.0, f64::NAN], 0.5),
            Err(Error::Computation(_))
        ));
    }
}
