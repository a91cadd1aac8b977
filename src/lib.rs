//! Conjugate-prior Bayesian comparison of groups
//!
//! Two models share one validation and summary layer:
//!
//! - **Gamma-Poisson** ([`conjugate_poisson`]): two groups of counts, posterior and
//!   predictive draws, paired differences and a zero/one model check
//! - **Normal-Gamma** ([`conjugate_normal`]): one to three groups of continuous
//!   data, θ and σ summaries, and ordering probabilities for three groups
//!
//! Posterior updates are closed form; everything downstream is Monte
//! Carlo over independent draws, summarised by type-7 empirical quantiles.
//!
//! # Example
//!
//! ```rust
//! use conjugate_stats::prelude::*;
//!
//! let prior = NormalGammaPrior::new(0.0, 1.0, 1.0, 1.0)?;
//! let result = NormalGammaAnalysis::new(SampleSize::new(500)?, prior)
//!     .with_interval(IntervalLevels::NINETY)
//!     .with_seed(1)
//!     .run(Groups::One(&[1.0, 2.0, 3.0]))?;
//! assert_eq!(result.groups().len(), 1);
//! # Ok::<(), conjugate_stats::Error>(())
//! ```

pub use conjugate_confidence;
pub use conjugate_core;
pub use conjugate_histogram;
pub use conjugate_normal;
pub use conjugate_poisson;
pub use conjugate_quantile;

pub use conjugate_core::{Error, Result};

/// Commonly used items
pub mod prelude {
    pub use conjugate_confidence::{
        credible_interval, CredibleInterval, CredibleIntervalEstimator, IntervalLevels,
        QuantileInterval,
    };
    pub use conjugate_core::{seeded_rng, Error, Result, SampleSize};
    pub use conjugate_histogram::{frequency_table, FrequencyTable};
    pub use conjugate_normal::{
        normal_gamma_inference, GroupOrdering, GroupSummary, Groups, NormalGammaAnalysis,
        NormalGammaArgs, NormalGammaPrior, NormalGammaResult, OrderingProbabilities,
    };
    pub use conjugate_poisson::{
        gamma_poisson_ppd, GammaPoissonAnalysis, GammaPoissonArgs, GammaPoissonResult,
        GammaPrior, PredictiveStrategy,
    };
    pub use conjugate_quantile::{LinearInterpolation, QuantileEstimator};
}
