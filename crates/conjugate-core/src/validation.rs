//! Input validation shared by every model entry point
//!
//! All checks run before any sampling. [`SampleSize`] can only be built
//! through these checks, so the model code downstream never re-validates
//! it. Data sets stay plain slices; a single observation is a length-1
//! slice.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Check the shape of a collection
///
/// With `expected_len = None` the collection must be non-empty; with
/// `Some(k)` it must have exactly `k` elements.
///
/// # Examples
///
/// ```rust
/// use conjugate_core::validation::is_valid_vector;
///
/// assert!(is_valid_vector(&[1.0], Some(1)));
/// assert!(!is_valid_vector(&[1.0, 2.0], Some(1)));
/// assert!(is_valid_vector(&[1, 2, 3], None));
/// assert!(!is_valid_vector::<u64>(&[], None));
/// ```
pub fn is_valid_vector<T>(x: &[T], expected_len: Option<usize>) -> bool {
    match expected_len {
        Some(len) => x.len() == len,
        None => !x.is_empty(),
    }
}

/// Extract a scalar hyperparameter from a loosely-typed slot
pub fn scalar(name: &str, values: &[f64]) -> Result<f64> {
    if !is_valid_vector(values, Some(1)) {
        return Err(Error::not_scalar(name, values.len()));
    }
    finite(name, values[0])
}

/// Reject NaN and infinite hyperparameters
pub fn finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::non_finite(name))
    }
}

/// Check a pair of probability levels `(lo, hi)` with `0 <= lo < hi <= 1`
pub fn check_interval(lo: f64, hi: f64) -> Result<()> {
    let in_range = (0.0..=1.0).contains(&lo) && (0.0..=1.0).contains(&hi);
    if in_range && lo < hi {
        Ok(())
    } else {
        Err(Error::InvalidConfidenceInterval { lo, hi })
    }
}

/// Number of independent draws per sample collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct SampleSize(usize);

impl SampleSize {
    /// Create a sample size; zero is rejected
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidSampleSize(
                "sample size must be a positive integer, got 0".to_string(),
            ));
        }
        Ok(Self(n))
    }

    /// Get the number of draws
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for SampleSize {
    type Error = Error;

    fn try_from(n: usize) -> Result<Self> {
        Self::new(n)
    }
}

impl TryFrom<f64> for SampleSize {
    type Error = Error;

    /// Accepts only finite, positive, integral values
    fn try_from(n: f64) -> Result<Self> {
        if !n.is_finite() || n < 1.0 || n.fract() != 0.0 || n > usize::MAX as f64 {
            return Err(Error::InvalidSampleSize(format!(
                "sample size must be a positive integer, got {n}"
            )));
        }
        Self::new(n as usize)
    }
}

impl From<SampleSize> for usize {
    fn from(n: SampleSize) -> usize {
        n.0
    }
}

/// Fail with a group-specific message when `data` is empty
pub fn check_data<T>(group: &str, data: &[T]) -> Result<()> {
    if is_valid_vector(data, None) {
        Ok(())
    } else {
        Err(Error::empty_data(group))
    }
}
