//! Credible intervals for posterior sample collections
//!
//! Bayesian credible intervals here are equal-tailed: the bounds are the
//! empirical quantiles of a Monte Carlo sample collection at caller-chosen
//! probability levels `(lo, hi)`.
//!
//! # Example
//!
//! ```rust
//! use conjugate_confidence::{
//!     CredibleIntervalEstimator, IntervalLevels, QuantileInterval,
//! };
//!
//! let draws = vec![0.8, 1.1, 0.9, 1.3, 1.0, 0.7, 1.2];
//! let ci = QuantileInterval::new(IntervalLevels::default())
//!     .credible_interval(&draws)
//!     .unwrap();
//! println!("{ci}");
//! ```

mod quantile_interval;
mod traits;
mod types;

// Re-exports
pub use quantile_interval::{credible_interval, QuantileInterval};
pub use traits::CredibleIntervalEstimator;
pub use types::{CredibleInterval, IntervalLevels};
