//! Gamma prior and posterior for a Poisson rate

use crate::negative_binomial::NegativeBinomial;
use crate::sampling::{draw_n, gamma_shape_rate};
use conjugate_core::{
    utils::sum,
    validation::{finite, scalar},
    Result,
};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

/// Gamma(shape, rate) prior on a Poisson rate θ
///
/// Hyperparameters only have to be finite here. Non-positive values are the
/// caller's responsibility and surface as `Error::Computation` once a
/// distribution is built from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GammaPrior {
    pub shape: f64,
    pub rate: f64,
}

impl<'de> Deserialize<'de> for GammaPrior {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            shape: f64,
            rate: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        GammaPrior::new(raw.shape, raw.rate).map_err(serde::de::Error::custom)
    }
}

impl GammaPrior {
    /// Create a prior from scalar hyperparameters
    pub fn new(shape: f64, rate: f64) -> Result<Self> {
        Ok(Self {
            shape: finite("shape", shape)?,
            rate: finite("rate", rate)?,
        })
    }

    /// Create a prior from loosely-typed slots, each of which must hold one value
    pub fn from_slices(shape: &[f64], rate: &[f64]) -> Result<Self> {
        Ok(Self {
            shape: scalar("shape", shape)?,
            rate: scalar("rate", rate)?,
        })
    }

    /// Prior mean `shape / rate`
    pub fn mean(&self) -> f64 {
        self.shape / self.rate
    }

    /// Conjugate update: Gamma(shape + Σy, rate + n)
    pub fn update(&self, counts: &[u64]) -> GammaPosterior {
        let total = sum(counts);
        GammaPosterior {
            shape: self.shape + total,
            rate: self.rate + counts.len() as f64,
            n: counts.len(),
            total,
        }
    }

    /// `n` draws of θ from the prior itself
    pub fn sample_rates<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<f64>> {
        let gamma = gamma_shape_rate(self.shape, self.rate)?;
        Ok(draw_n(rng, &gamma, n))
    }
}

/// Gamma posterior of θ after observing `n` counts summing to `total`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GammaPosterior {
    pub shape: f64,
    pub rate: f64,
    pub n: usize,
    pub total: f64,
}

impl GammaPosterior {
    /// Posterior mean of θ
    pub fn mean(&self) -> f64 {
        self.shape / self.rate
    }

    /// Posterior variance of θ
    pub fn variance(&self) -> f64 {
        self.shape / (self.rate * self.rate)
    }

    /// Posterior predictive of one new count
    ///
    /// Negative-Binomial with shape `Σy + a` and success probability
    /// `(b + n) / (b + n + 1)`.
    pub fn predictive(&self) -> Result<NegativeBinomial> {
        NegativeBinomial::new(self.shape, self.rate / (self.rate + 1.0))
    }

    /// `n` draws of θ from the posterior
    pub fn sample_rates<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<f64>> {
        let gamma = gamma_shape_rate(self.shape, self.rate)?;
        Ok(draw_n(rng, &gamma, n))
    }
}
