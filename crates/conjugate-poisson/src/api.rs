//! Keyword-style entry point
//!
//! Mirrors the flat argument list callers from dynamic environments use,
//! performing every shape check before building the typed analysis.

use crate::analysis::{GammaPoissonAnalysis, GammaPoissonResult};
use crate::prior::GammaPrior;
use crate::strategy::PredictiveStrategy;
use conjugate_confidence::IntervalLevels;
use conjugate_core::{validation::scalar, Result, SampleSize};

/// Arguments of [`gamma_poisson_ppd`]
///
/// Every hyperparameter slot is a slice so that a caller passing a vector
/// where a scalar belongs gets `Error::InvalidScalarParameter` instead of
/// a silently truncated value.
#[derive(Debug, Clone, Default)]
pub struct GammaPoissonArgs<'a> {
    pub sample_size: f64,
    pub gamma_a1: &'a [f64],
    pub gamma_b1: &'a [f64],
    pub y1: &'a [u64],
    pub gamma_a2: &'a [f64],
    pub gamma_b2: &'a [f64],
    pub y2: &'a [u64],
    pub using_simulation: bool,
    pub confidence_interval: Option<&'a [f64]>,
    pub fixed_rate: Option<&'a [f64]>,
    pub seed: Option<u64>,
}

/// Compare two Poisson rates under independent Gamma priors
///
/// # Example
/// ```rust
/// use conjugate_poisson::api::{gamma_poisson_ppd, GammaPoissonArgs};
///
/// let result = gamma_poisson_ppd(GammaPoissonArgs {
///     sample_size: 5000.0,
///     gamma_a1: &[2.0],
///     gamma_b1: &[1.0],
///     y1: &[0, 0, 1, 2, 1, 0, 3],
///     gamma_a2: &[2.0],
///     gamma_b2: &[1.0],
///     y2: &[1, 2, 2, 3, 1, 4],
///     confidence_interval: Some(&[0.025, 0.975]),
///     seed: Some(42),
///     ..Default::default()
/// })
/// .unwrap();
///
/// let ci = result.intervals.unwrap();
/// assert!(ci.rate.lower < ci.rate.upper);
/// ```
pub fn gamma_poisson_ppd(args: GammaPoissonArgs<'_>) -> Result<GammaPoissonResult> {
    let sample_size = SampleSize::try_from(args.sample_size)?;
    let prior1 = GammaPrior::from_slices(args.gamma_a1, args.gamma_b1)?;
    let prior2 = GammaPrior::from_slices(args.gamma_a2, args.gamma_b2)?;
    let interval = args
        .confidence_interval
        .map(IntervalLevels::from_slice)
        .transpose()?;
    let fixed_rate = args
        .fixed_rate
        .map(|rate| scalar("fixed_rate", rate))
        .transpose()?;

    let mut analysis = GammaPoissonAnalysis::new(sample_size, prior1, prior2)
        .with_strategy(PredictiveStrategy::from_simulation_flag(args.using_simulation));
    if let Some(levels) = interval {
        analysis = analysis.with_interval(levels);
    }
    if let Some(rate) = fixed_rate {
        analysis = analysis.with_fixed_rate(rate);
    }
    if let Some(seed) = args.seed {
        analysis = analysis.with_seed(seed);
    }
    analysis.run(args.y1, args.y2)
}
