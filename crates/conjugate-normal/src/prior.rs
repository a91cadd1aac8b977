//! Normal-Gamma prior and its conjugate update

use conjugate_core::{
    validation::{finite, scalar},
    Result, SufficientStats,
};
use serde::{Deserialize, Deserializer, Serialize};

/// Normal-Gamma prior on (θ, σ²)
///
/// θ | σ² ~ Normal(`mu_0`, σ² / `kappa_0`) and 1/σ² ~ Gamma(`nu_0` / 2,
/// `nu_0` `sigma_0_sq` / 2). Positivity of `sigma_0_sq`, `kappa_0` and
/// `nu_0` is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalGammaPrior {
    pub mu_0: f64,
    pub sigma_0_sq: f64,
    pub kappa_0: f64,
    pub nu_0: f64,
}

impl<'de> Deserialize<'de> for NormalGammaPrior {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            mu_0: f64,
            sigma_0_sq: f64,
            kappa_0: f64,
            nu_0: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        NormalGammaPrior::new(raw.mu_0, raw.sigma_0_sq, raw.kappa_0, raw.nu_0)
            .map_err(serde::de::Error::custom)
    }
}

impl NormalGammaPrior {
    /// Create a prior from scalar hyperparameters
    pub fn new(mu_0: f64, sigma_0_sq: f64, kappa_0: f64, nu_0: f64) -> Result<Self> {
        Ok(Self {
            mu_0: finite("mu_0", mu_0)?,
            sigma_0_sq: finite("sigma_0_square", sigma_0_sq)?,
            kappa_0: finite("kappa_0", kappa_0)?,
            nu_0: finite("nu_0", nu_0)?,
        })
    }

    /// Create a prior from loosely-typed slots, each of which must hold one value
    pub fn from_slices(
        mu_0: &[f64],
        sigma_0_sq: &[f64],
        kappa_0: &[f64],
        nu_0: &[f64],
    ) -> Result<Self> {
        Ok(Self {
            mu_0: scalar("mu_0", mu_0)?,
            sigma_0_sq: scalar("sigma_0_square", sigma_0_sq)?,
            kappa_0: scalar("kappa_0", kappa_0)?,
            nu_0: scalar("nu_0", nu_0)?,
        })
    }

    /// Conjugate update from one group's data
    ///
    /// A single observation has sample variance 0, so the `(n - 1) s²`
    /// term drops out.
    pub fn update(&self, data: &[f64]) -> NormalGammaPosterior {
        let stats = SufficientStats::from_slice(data);
        let n = stats.n as f64;

        let kappa_n = self.kappa_0 + n;
        let mu_n = (self.kappa_0 * self.mu_0 + n * stats.mean) / kappa_n;
        let nu_n = self.nu_0 + n;
        let shift = stats.mean - self.mu_0;
        let sigma_n_sq = (self.nu_0 * self.sigma_0_sq
            + (n - 1.0).max(0.0) * stats.variance
            + (self.kappa_0 * n / kappa_n) * shift * shift)
            / nu_n;

        NormalGammaPosterior {
            n: stats.n,
            kappa_n,
            mu_n,
            nu_n,
            sigma_n_sq,
        }
    }
}

/// Posterior hyperparameters of one group
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalGammaPosterior {
    pub n: usize,
    pub kappa_n: f64,
    pub mu_n: f64,
    pub nu_n: f64,
    pub sigma_n_sq: f64,
}

impl NormalGammaPosterior {
    /// Shape of the Gamma posterior on the precision
    pub fn precision_shape(&self) -> f64 {
        self.nu_n / 2.0
    }

    /// Rate of the Gamma posterior on the precision
    pub fn precision_rate(&self) -> f64 {
        self.nu_n * self.sigma_n_sq / 2.0
    }
}
