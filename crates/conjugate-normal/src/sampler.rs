//! Paired posterior and predictive draws
//!
//! Replicate `i` draws σ²ᵢ first and reuses it for both θᵢ and ỹᵢ, so the
//! three collections share an index and stay correlated within a replicate.

use crate::prior::NormalGammaPosterior;
use conjugate_core::{Error, Result};
use rand::Rng;
use rand_distr::{Distribution, Gamma, StandardNormal};
use serde::Serialize;

/// Draws for one group, paired by replicate index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PosteriorDraws {
    /// σ² per replicate
    pub variance: Vec<f64>,
    /// θ per replicate
    pub theta: Vec<f64>,
    /// ỹ per replicate
    pub predictive: Vec<f64>,
}

impl PosteriorDraws {
    pub fn len(&self) -> usize {
        self.theta.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theta.is_empty()
    }

    /// √σ² per replicate
    pub fn sigma(&self) -> Vec<f64> {
        self.variance.iter().map(|v| v.sqrt()).collect()
    }
}

impl NormalGammaPosterior {
    /// Draw `n` paired replicates of (σ², θ, ỹ)
    ///
    /// Fails with `Error::Computation` when the precision Gamma is
    /// degenerate, which happens for non-positive `nu_n` or `sigma_n_sq`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<PosteriorDraws> {
        let (shape, rate) = (self.precision_shape(), self.precision_rate());
        let precision = Gamma::new(shape, 1.0 / rate).map_err(|e| {
            Error::distribution(&format!("Gamma(shape={shape}, rate={rate})"), e)
        })?;

        let variance: Vec<f64> = (0..n).map(|_| 1.0 / precision.sample(rng)).collect();

        let theta: Vec<f64> = variance
            .iter()
            .map(|&v| {
                let z: f64 = StandardNormal.sample(rng);
                self.mu_n + (v / self.kappa_n).sqrt() * z
            })
            .collect();

        let predictive = theta
            .iter()
            .zip(&variance)
            .map(|(&t, &v)| {
                let z: f64 = StandardNormal.sample(rng);
                t + v.sqrt() * z
            })
            .collect();

        Ok(PosteriorDraws {
            variance,
            theta,
            predictive,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prior::NormalGammaPrior;
    use approx::assert_abs_diff_eq;
    use conjugate_core::utils::mean;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn posterior() -> NormalGammaPosterior {
        NormalGammaPrior::new(0.0, 1.0, 1.0, 1.0)
            .unwrap()
            .update(&[1.0, 2.0, 3.0])
    }

    #[test]
    fn test_lengths_match() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let draws = posterior().sample(&mut rng, 500).unwrap();
        assert_eq!(draws.len(), 500);
        assert_eq!(draws.variance.len(), 500);
        assert_eq!(draws.predictive.len(), 500);
        assert!(draws.variance.iter().all(|&v| v > 0.0));
    }

    #[test]
    fn test_theta_centres_on_mu_n() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let post = posterior();
        let draws = post.sample(&mut rng, 40_000).unwrap();
        assert_abs_diff_eq!(mean(&draws.theta), post.mu_n, epsilon = 0.02);
        assert_abs_diff_eq!(mean(&draws.predictive), post.mu_n, epsilon = 0.05);
    }

    #[test]
    fn test_precision_mean() {
        // E[1/σ²] = shape / rate = 2 / 3
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let draws = posterior().sample(&mut rng, 40_000).unwrap();
        let precision: Vec<f64> = draws.variance.iter().map(|v| 1.0 / v).collect();
        assert_abs_diff_eq!(mean(&precision), 2.0 / 3.0, epsilon = 0.01);
    }

    #[test]
    fn test_predictive_spread_tracks_variance() {
        // Replicates with larger σ² scatter further from θ
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let draws = posterior().sample(&mut rng, 20_000).unwrap();
        let mut by_variance: Vec<(f64, f64)> = draws
            .variance
            .iter()
            .zip(draws.theta.iter().zip(&draws.predictive))
            .map(|(&v, (&t, &y))| (v, (y - t).powi(2)))
            .collect();
        by_variance.sort_by(|a, b| a.0.total_cmp(&b.0));
        let half = by_variance.len() / 2;
        let low: f64 = by_variance[..half].iter().map(|p| p.1).sum();
        let high: f64 = by_variance[half..].iter().map(|p| p.1).sum();
        assert!(high > low);
    }

    #[test]
    fn test_degenerate_posterior_is_computation_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let bad = NormalGammaPosterior {
            n: 1,
            kappa_n: 1.0,
            mu_n: 0.0,
            nu_n: -1.0,
            sigma_n_sq: 1.0,
        };
        assert!(matches!(bad.sample(&mut rng, 10), Err(Error::Computation(_))));
    }
}
