//! Negative-Binomial sampler for the Gamma-Poisson posterior predictive

use crate::sampling::{gamma_shape_rate, poisson_count};
use conjugate_core::{Error, Result};
use rand::{distributions::Distribution, Rng};
use rand_distr::Gamma;
use serde::Serialize;

/// Negative-Binomial with real `shape` and success probability `prob`
///
/// Counts failures before the `shape`-th success, so the mean is
/// `shape (1 - prob) / prob`. Sampled as the Gamma-Poisson mixture
/// `λ ~ Gamma(shape, rate = prob / (1 - prob))`, `y ~ Poisson(λ)`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NegativeBinomial {
    shape: f64,
    prob: f64,
    #[serde(skip)]
    mixing: Gamma<f64>,
}

impl NegativeBinomial {
    /// Create a new sampler; requires `shape > 0` and `0 < prob < 1`
    pub fn new(shape: f64, prob: f64) -> Result<Self> {
        if !(prob > 0.0 && prob < 1.0) {
            return Err(Error::Computation(format!(
                "negative binomial probability {prob} must be in (0, 1)"
            )));
        }
        let mixing = gamma_shape_rate(shape, prob / (1.0 - prob))?;
        Ok(Self {
            shape,
            prob,
            mixing,
        })
    }

    pub fn shape(&self) -> f64 {
        self.shape
    }

    pub fn prob(&self) -> f64 {
        self.prob
    }

    pub fn mean(&self) -> f64 {
        self.shape * (1.0 - self.prob) / self.prob
    }

    pub fn variance(&self) -> f64 {
        self.shape * (1.0 - self.prob) / (self.prob * self.prob)
    }
}

impl Distribution<u64> for NegativeBinomial {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let lambda = self.mixing.sample(rng);
        poisson_count(rng, lambda)
    }
}
