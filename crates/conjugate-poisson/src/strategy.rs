//! Posterior-predictive sampling strategies

use crate::prior::{GammaPosterior, GammaPrior};
use crate::sampling::poisson_count;
use conjugate_core::Result;
use rand::{distributions::Distribution, Rng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How predictive counts are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictiveStrategy {
    /// Draw directly from the Negative-Binomial posterior predictive
    #[default]
    Direct,
    /// Draw θ from the *prior* Gamma, then a Poisson count given θ.
    ///
    /// This is the legacy simulation path. It ignores the data, so its
    /// output is a prior predictive, not a posterior predictive.
    TwoStagePrior,
    /// Draw θ from the posterior Gamma, then a Poisson count given θ
    TwoStagePosterior,
}

impl PredictiveStrategy {
    /// Map the legacy `using_simulation` flag
    ///
    /// `true` selects the two-stage path exactly as it historically behaved
    /// (θ from the prior); `false` selects direct sampling.
    pub fn from_simulation_flag(using_simulation: bool) -> Self {
        if using_simulation {
            Self::TwoStagePrior
        } else {
            Self::Direct
        }
    }

    /// Draw `n` predictive counts for one group
    pub fn sample<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        prior: &GammaPrior,
        posterior: &GammaPosterior,
        n: usize,
    ) -> Result<Vec<u64>> {
        let counts = match self {
            Self::Direct => {
                let nb = posterior.predictive()?;
                (0..n).map(|_| nb.sample(rng)).collect()
            }
            Self::TwoStagePrior => {
                let rates = prior.sample_rates(rng, n)?;
                two_stage(rng, rates)
            }
            Self::TwoStagePosterior => {
                let rates = posterior.sample_rates(rng, n)?;
                two_stage(rng, rates)
            }
        };
        Ok(counts)
    }
}

fn two_stage<R: Rng + ?Sized>(rng: &mut R, rates: Vec<f64>) -> Vec<u64> {
    rates
        .into_iter()
        .map(|theta| poisson_count(rng, theta))
        .collect()
}

impl fmt::Display for PredictiveStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Direct => "direct negative-binomial",
            Self::TwoStagePrior => "two-stage (prior θ)",
            Self::TwoStagePosterior => "two-stage (posterior θ)",
        };
        f.write_str(name)
    }
}
