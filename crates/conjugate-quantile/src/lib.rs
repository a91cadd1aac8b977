//! Empirical quantile estimation
//!
//! Credible intervals in this workspace are read off Monte Carlo sample
//! collections, so the only estimator needed is the linear-interpolation
//! (type 7) empirical quantile. It sits behind [`QuantileEstimator`] so
//! interval builders stay generic over the estimator.
//!
//! # Example
//!
//! ```rust
//! use conjugate_quantile::{LinearInterpolation, QuantileEstimator};
//!
//! let draws = vec![0.3, 0.1, 0.4, 0.2, 0.5];
//! let bounds = LinearInterpolation.quantiles(&draws, &[0.025, 0.975]).unwrap();
//! assert!(bounds[0] < bounds[1]);
//! ```

pub mod linear;
pub mod traits;

pub use linear::{quantiles, LinearInterpolation};
pub use traits::{sorted, QuantileEstimator};

/// Default estimator used by the model crates
pub type DefaultQuantileEstimator = LinearInterpolation;
