//! Per-group reduction of posterior draws

use crate::prior::NormalGammaPosterior;
use crate::sampler::PosteriorDraws;
use conjugate_confidence::{credible_interval, CredibleInterval, IntervalLevels};
use conjugate_core::{utils::mean, Result};
use serde::Serialize;

/// Summary of one group's posterior
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub posterior: NormalGammaPosterior,
    pub draws: PosteriorDraws,
    /// Posterior mean of θ
    pub theta_mean: f64,
    pub theta_interval: CredibleInterval,
    /// Posterior mean of σ
    pub sigma_mean: f64,
    pub sigma_interval: CredibleInterval,
}

impl GroupSummary {
    /// Reduce `draws` to means and credible intervals at `levels`
    pub fn new(
        posterior: NormalGammaPosterior,
        draws: PosteriorDraws,
        levels: IntervalLevels,
    ) -> Result<Self> {
        let sigma = draws.sigma();
        Ok(Self {
            posterior,
            theta_mean: mean(&draws.theta),
            theta_interval: credible_interval(&draws.theta, levels)?,
            sigma_mean: mean(&sigma),
            sigma_interval: credible_interval(&sigma, levels)?,
            draws,
        })
    }

    /// Posterior predictive draws ỹ
    pub fn predictive(&self) -> &[f64] {
        &self.draws.predictive
    }
}
