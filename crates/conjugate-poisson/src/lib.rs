//! Gamma-Poisson comparison of two count groups
//!
//! Each group's counts are modelled as Poisson(θ) with a Gamma(a, b) prior
//! on θ. Conjugacy gives the posterior Gamma(a + Σy, b + n) and a
//! Negative-Binomial posterior predictive in closed form; everything else
//! is Monte Carlo over those.
//!
//! The analysis returns, per group, posterior draws of θ and predictive
//! draws of a new count, plus paired differences between the groups,
//! optional credible intervals for those differences, and the data behind
//! the diagnostic plots (frequency tables, fixed-rate pmf overlays and a
//! zero/one posterior-predictive scatter).
//!
//! # Example
//!
//! ```rust
//! use conjugate_confidence::IntervalLevels;
//! use conjugate_core::SampleSize;
//! use conjugate_poisson::{GammaPoissonAnalysis, GammaPrior, PredictiveStrategy};
//!
//! let prior = GammaPrior::new(2.0, 1.0).unwrap();
//! let result = GammaPoissonAnalysis::new(SampleSize::new(2000).unwrap(), prior, prior)
//!     .with_strategy(PredictiveStrategy::Direct)
//!     .with_interval(IntervalLevels::default())
//!     .with_seed(7)
//!     .run(&[0, 1, 0, 2, 1], &[2, 3, 1, 4])
//!     .unwrap();
//!
//! println!("P(θ2 > θ1) = {:.3}", result.prob_rate2_greater);
//! ```

pub mod analysis;
pub mod api;
pub mod check;
pub mod fit;
pub mod negative_binomial;
pub mod prior;
pub mod sampling;
pub mod strategy;

pub use analysis::{DifferenceIntervals, GammaPoissonAnalysis, GammaPoissonResult, GroupDraws};
pub use api::{gamma_poisson_ppd, GammaPoissonArgs};
pub use check::{ZeroOneCheck, ZeroOneCount, DEFAULT_REPLICATIONS};
pub use fit::{FitPoint, FixedRateFit};
pub use negative_binomial::NegativeBinomial;
pub use prior::{GammaPosterior, GammaPrior};
pub use strategy::PredictiveStrategy;
