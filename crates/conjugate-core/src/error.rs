//! Error types for conjugate-model analysis
//!
//! Provides a unified error type for all conjugate-stats crates.

use thiserror::Error;

/// Core error type for conjugate-model operations
///
/// Every input-validation variant is raised before any sampling happens,
/// so an error never comes with partial results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Sample size is not a positive integer
    #[error("invalid sample size: {0}")]
    InvalidSampleSize(String),

    /// A hyperparameter was not a single finite value
    #[error("scalar parameter expected: `{name}` has {len} value(s)")]
    InvalidScalarParameter { name: String, len: usize },

    /// A data set was empty or otherwise not a usable sequence
    #[error("data must be a vector: {0}")]
    InvalidDataVector(String),

    /// Credible interval levels are not `0 <= lo < hi <= 1`
    #[error("invalid confidence interval: ({lo}, {hi}) must satisfy 0 <= lo < hi <= 1")]
    InvalidConfidenceInterval { lo: f64, hi: f64 },

    /// A quantile probability outside `[0, 1]`
    #[error("probability {p} must be in [0, 1]")]
    InvalidProbability { p: f64 },

    /// Numerical domain error raised while constructing or sampling a distribution
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an empty data set
    pub fn empty_data(group: &str) -> Self {
        Self::InvalidDataVector(format!("{group} has no observations"))
    }

    /// Create an error for a scalar slot that received `len` values
    pub fn not_scalar(name: &str, len: usize) -> Self {
        Self::InvalidScalarParameter {
            name: name.to_string(),
            len,
        }
    }

    /// Create an error for a non-finite scalar
    pub fn non_finite(name: &str) -> Self {
        Self::InvalidScalarParameter {
            name: format!("{name} (non-finite)"),
            len: 1,
        }
    }

    /// Check that a quantile probability lies in `[0, 1]`
    pub fn check_probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidProbability { p });
        }
        Ok(())
    }

    /// Wrap a distribution construction failure
    pub fn distribution<E: std::fmt::Display>(what: &str, err: E) -> Self {
        Self::Computation(format!("cannot build {what}: {err}"))
    }
}
