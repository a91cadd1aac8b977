//! Distribution helpers shared by the samplers

use conjugate_core::{Error, Result};
use rand::Rng;
use rand_distr::{Distribution, Gamma, Poisson};

/// Gamma distribution in the shape/rate parameterisation
///
/// `rand_distr` uses shape/scale, so scale = 1 / rate.
pub fn gamma_shape_rate(shape: f64, rate: f64) -> Result<Gamma<f64>> {
    Gamma::new(shape, 1.0 / rate)
        .map_err(|e| Error::distribution(&format!("Gamma(shape={shape}, rate={rate})"), e))
}

/// One Poisson count with mean `lambda`
///
/// Poisson(0) is deterministically 0; non-positive or non-finite rates are
/// treated the same way.
pub fn poisson_count<R: Rng + ?Sized>(rng: &mut R, lambda: f64) -> u64 {
    match Poisson::new(lambda) {
        Ok(pois) if lambda.is_finite() => {
            let draw: f64 = pois.sample(rng);
            draw as u64
        }
        _ => 0,
    }
}

/// `n` independent draws from `dist`
pub fn draw_n<R, D>(rng: &mut R, dist: &D, n: usize) -> Vec<f64>
where
    R: Rng + ?Sized,
    D: Distribution<f64>,
{
    (0..n).map(|_| dist.sample(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_gamma_rate_parameterisation() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let gamma = gamma_shape_rate(6.0, 3.0).unwrap();
        let draws = draw_n(&mut rng, &gamma, 50_000);
        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        assert_abs_diff_eq!(mean, 2.0, epsilon = 0.03);
    }

    #[test]
    fn test_invalid_gamma_is_computation_error() {
        assert!(matches!(
            gamma_shape_rate(0.0, 1.0),
            Err(Error::Computation(_))
        ));
        assert!(matches!(
            gamma_shape_rate(1.0, -2.0),
            Err(Error::Computation(_))
        ));
    }

    #[test]
    fn test_poisson_zero_rate() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(poisson_count(&mut rng, 0.0), 0);
        assert_eq!(poisson_count(&mut rng, f64::NAN), 0);
        assert_eq!(poisson_count(&mut rng, -2.0), 0);
        assert_eq!(poisson_count(&mut rng, f64::INFINITY), 0);
        let mean = (0..20_000)
            .map(|_| poisson_count(&mut rng, 3.5) as f64)
            .sum::<f64>()
            / 20_000.0;
        assert_abs_diff_eq!(mean, 3.5, epsilon = 0.06);
    }
}
