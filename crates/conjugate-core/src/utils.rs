//! Descriptive statistics over data slices
//!
//! Generic over anything convertible to `f64`, so integer counts and real
//! observations share the same helpers.

use num_traits::ToPrimitive;
use serde::Serialize;

/// Sum of a slice as `f64`
///
/// Values that cannot be represented as `f64` contribute `NaN`.
///
/// # Examples
///
/// ```rust
/// use conjugate_core::utils::sum;
///
/// assert_eq!(sum(&[1_u64, 2, 3]), 6.0);
/// ```
pub fn sum<T: ToPrimitive>(data: &[T]) -> f64 {
    data.iter().map(|x| x.to_f64().unwrap_or(f64::NAN)).sum()
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use conjugate_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
/// ```
pub fn mean<T: ToPrimitive>(data: &[T]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    sum(data) / data.len() as f64
}

/// Calculate the sample variance (denominator `n - 1`)
///
/// Returns 0.0 for slices with less than 2 elements.
///
/// # Examples
///
/// ```rust
/// use conjugate_core::utils::sample_variance;
///
/// let var = sample_variance(&[1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert!((var - 2.5).abs() < 1e-12);
/// ```
pub fn sample_variance<T: ToPrimitive>(data: &[T]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let m = mean(data);
    data.iter()
        .map(|x| {
            let diff = x.to_f64().unwrap_or(f64::NAN) - m;
            diff * diff
        })
        .sum::<f64>()
        / (data.len() - 1) as f64
}

/// Count, mean and sample variance of a data set
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SufficientStats {
    pub n: usize,
    pub mean: f64,
    pub variance: f64,
}

impl SufficientStats {
    /// Compute the statistics in one place
    pub fn from_slice<T: ToPrimitive>(data: &[T]) -> Self {
        Self {
            n: data.len(),
            mean: mean(data),
            variance: sample_variance(data),
        }
    }
}

/// Element-wise `b[i] - a[i]` over paired draws
///
/// The shorter slice bounds the output; callers pass equal lengths.
pub fn paired_difference(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| y - x).collect()
}

/// Fraction of entries satisfying `pred`
pub fn fraction<T>(data: &[T], pred: impl Fn(&T) -> bool) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().filter(|x| pred(x)).count() as f64 / data.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_and_single() {
        assert_eq!(mean::<f64>(&[]), 0.0);
        assert_eq!(sample_variance(&[4.0]), 0.0);
        assert_eq!(fraction::<f64>(&[], |_| true), 0.0);
    }

    #[test]
    fn test_sufficient_stats() {
        let stats = SufficientStats::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(stats.n, 3);
        assert_relative_eq!(stats.mean, 2.0);
        assert_relative_eq!(stats.variance, 1.0);

        let counts = SufficientStats::from_slice(&[0_u64, 0, 1, 3]);
        assert_relative_eq!(counts.mean, 1.0);
        assert_relative_eq!(counts.variance, 2.0);
    }

    #[test]
    fn test_paired_difference_is_elementwise() {
        let d = paired_difference(&[1.0, 2.0, 3.0], &[2.0, 2.0, 5.0]);
        assert_eq!(d, vec![1.0, 0.0, 2.0]);
    }

    #[test]
    fn test_fraction() {
        assert_relative_eq!(fraction(&[1, 2, 3, 4], |&x| x > 2), 0.5);
    }
}
