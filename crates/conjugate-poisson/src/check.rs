//! Posterior-predictive check on the number of zeros and ones
//!
//! Each posterior draw of θ generates a replicated data set of fixed size.
//! The scatter of (zeros, ones) across replicates shows whether the
//! observed pair is plausible under a plain Poisson model; zero-inflated
//! data sits far outside the cloud.

use crate::sampling::poisson_count;
use conjugate_core::{utils::fraction, Error, Result};
use rand::Rng;
use serde::Serialize;

/// Size of each replicated data set
pub const DEFAULT_REPLICATIONS: usize = 218;

/// Number of zeros and ones in one data set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZeroOneCount {
    pub zeros: usize,
    pub ones: usize,
}

impl ZeroOneCount {
    /// Tally zeros and ones in `counts`
    pub fn tally(counts: impl IntoIterator<Item = u64>) -> Self {
        counts
            .into_iter()
            .fold(Self { zeros: 0, ones: 0 }, |mut acc, y| {
                match y {
                    0 => acc.zeros += 1,
                    1 => acc.ones += 1,
                    _ => {}
                }
                acc
            })
    }
}

/// Scatter data for the zero/one check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZeroOneCheck {
    /// One point per posterior draw of θ
    pub replicates: Vec<ZeroOneCount>,
    /// Highlighted reference point from the observed data
    pub observed: ZeroOneCount,
    /// Size of each replicated data set
    pub replications: usize,
}

impl ZeroOneCheck {
    /// Simulate one replicated data set per entry of `rates`
    pub fn simulate<R: Rng + ?Sized>(
        rng: &mut R,
        rates: &[f64],
        observed: &[u64],
        replications: usize,
    ) -> Result<Self> {
        if replications == 0 {
            return Err(Error::InvalidSampleSize(
                "replicated data sets need at least one observation".to_string(),
            ));
        }

        let replicates = rates
            .iter()
            .map(|&theta| {
                ZeroOneCount::tally((0..replications).map(|_| poisson_count(rng, theta)))
            })
            .collect();

        Ok(Self {
            replicates,
            observed: ZeroOneCount::tally(observed.iter().copied()),
            replications,
        })
    }

    /// Fraction of replicates with at least as many zeros as observed
    pub fn zeros_tail_fraction(&self) -> f64 {
        fraction(&self.replicates, |r| r.zeros >= self.observed.zeros)
    }

    /// Fraction of replicates with at least as many ones as observed
    pub fn ones_tail_fraction(&self) -> f64 {
        fraction(&self.replicates, |r| r.ones >= self.observed.ones)
    }

    /// Scatter coordinates `(zeros, ones)`
    pub fn points(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.replicates.iter().map(|r| (r.zeros, r.ones))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_tally() {
        let c = ZeroOneCount::tally([0, 1, 0, 3, 1, 0, 7]);
        assert_eq!(c, ZeroOneCount { zeros: 3, ones: 2 });
    }

    #[test]
    fn test_shape_of_scatter() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let rates = vec![1.0; 25];
        let check = ZeroOneCheck::simulate(&mut rng, &rates, &[0, 0, 1], DEFAULT_REPLICATIONS)
            .unwrap();
        assert_eq!(check.replicates.len(), 25);
        assert_eq!(check.observed, ZeroOneCount { zeros: 2, ones: 1 });
        for (zeros, ones) in check.points() {
            assert!(zeros + ones <= DEFAULT_REPLICATIONS);
        }
    }

    #[test]
    fn test_zero_inflated_data_is_extreme() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        // Rate around 1 predicts ~80 zeros in 218 draws; 180 observed zeros is far out
        let mut observed = vec![0_u64; 180];
        observed.extend(std::iter::repeat(5).take(38));
        let rates = vec![1.0; 500];
        let check = ZeroOneCheck::simulate(&mut rng, &rates, &observed, 218).unwrap();
        assert_eq!(check.zeros_tail_fraction(), 0.0);
        assert_eq!(check.ones_tail_fraction(), 1.0);
    }

    #[test]
    fn test_zero_replications_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(ZeroOneCheck::simulate(&mut rng, &[1.0], &[0], 0).is_err());
    }
}
