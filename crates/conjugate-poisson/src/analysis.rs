//! Two-group Gamma-Poisson comparison
//!
//! One call runs validation, the conjugate update, sampling and
//! summarisation in sequence. Every sample collection is returned; the
//! difference intervals are present only when levels were requested.

use crate::check::{ZeroOneCheck, DEFAULT_REPLICATIONS};
use crate::fit::FixedRateFit;
use crate::prior::{GammaPosterior, GammaPrior};
use crate::strategy::PredictiveStrategy;
use conjugate_confidence::{credible_interval, CredibleInterval, IntervalLevels};
use conjugate_core::{
    seeded_rng,
    utils::{fraction, mean, paired_difference},
    validation::{check_data, finite},
    Error, Result, SampleSize,
};
use conjugate_histogram::{frequency_table, FrequencyTable};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Configuration of a two-group Gamma-Poisson comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GammaPoissonAnalysis {
    sample_size: SampleSize,
    priors: [GammaPrior; 2],
    strategy: PredictiveStrategy,
    interval: Option<IntervalLevels>,
    fixed_rate: Option<f64>,
    replications: usize,
    seed: Option<u64>,
}

impl GammaPoissonAnalysis {
    /// Create an analysis with direct predictive sampling and no intervals
    pub fn new(sample_size: SampleSize, prior1: GammaPrior, prior2: GammaPrior) -> Self {
        Self {
            sample_size,
            priors: [prior1, prior2],
            strategy: PredictiveStrategy::Direct,
            interval: None,
            fixed_rate: None,
            replications: DEFAULT_REPLICATIONS,
            seed: None,
        }
    }

    /// Choose how predictive counts are drawn
    pub fn with_strategy(mut self, strategy: PredictiveStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Request credible intervals for the two differences
    pub fn with_interval(mut self, levels: IntervalLevels) -> Self {
        self.interval = Some(levels);
        self
    }

    /// Compare each group's frequency table to Poisson(`rate`)
    pub fn with_fixed_rate(mut self, rate: f64) -> Self {
        self.fixed_rate = Some(rate);
        self
    }

    /// Size of each replicated data set in the zero/one check
    pub fn with_replications(mut self, replications: usize) -> Self {
        self.replications = replications;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn sample_size(&self) -> SampleSize {
        self.sample_size
    }

    pub fn strategy(&self) -> PredictiveStrategy {
        self.strategy
    }

    /// Run with a generator seeded from the configured seed
    pub fn run(&self, y1: &[u64], y2: &[u64]) -> Result<GammaPoissonResult> {
        let mut rng = seeded_rng(self.seed);
        self.run_with_rng(&mut rng, y1, y2)
    }

    /// Run with a caller-supplied generator
    #[instrument(
        skip(self, rng, y1, y2),
        fields(sample_size = self.sample_size.get(), n1 = y1.len(), n2 = y2.len(), strategy = %self.strategy)
    )]
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        y1: &[u64],
        y2: &[u64],
    ) -> Result<GammaPoissonResult> {
        check_data("y1", y1)?;
        check_data("y2", y2)?;
        let fixed_rate = self
            .fixed_rate
            .map(|rate| finite("fixed_rate", rate))
            .transpose()?;
        if self.replications == 0 {
            return Err(Error::InvalidSampleSize(
                "replicated data sets need at least one observation".to_string(),
            ));
        }

        let n = self.sample_size.get();
        let group1 = self.sample_group(rng, &self.priors[0], y1, fixed_rate)?;
        let group2 = self.sample_group(rng, &self.priors[1], y2, fixed_rate)?;

        let zero_one_check = ZeroOneCheck::simulate(rng, &group2.rates, y2, self.replications)?;

        let rate_difference = paired_difference(&group1.rates, &group2.rates);
        let predictive_difference = paired_difference(
            &as_f64(&group1.predictive),
            &as_f64(&group2.predictive),
        );

        let intervals = self
            .interval
            .map(|levels| -> Result<DifferenceIntervals> {
                Ok(DifferenceIntervals {
                    rate: credible_interval(&rate_difference, levels)?,
                    predictive: credible_interval(&predictive_difference, levels)?,
                })
            })
            .transpose()?;

        let result = GammaPoissonResult {
            sample_size: n,
            strategy: self.strategy,
            rate_difference_mean: mean(&rate_difference),
            predictive_difference_mean: mean(&predictive_difference),
            prob_rate2_greater: fraction(&rate_difference, |&d| d > 0.0),
            prob_predictive2_greater: fraction(&predictive_difference, |&d| d > 0.0),
            groups: [group1, group2],
            rate_difference,
            predictive_difference,
            intervals,
            zero_one_check,
        };

        debug!(
            rate_difference_mean = result.rate_difference_mean,
            prob_rate2_greater = result.prob_rate2_greater,
            zeros_tail = result.zero_one_check.zeros_tail_fraction(),
            "gamma-poisson comparison complete"
        );
        Ok(result)
    }

    fn sample_group<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        prior: &GammaPrior,
        y: &[u64],
        fixed_rate: Option<f64>,
    ) -> Result<GroupDraws> {
        let n = self.sample_size.get();
        let posterior = prior.update(y);
        debug!(
            shape = posterior.shape,
            rate = posterior.rate,
            mean = posterior.mean(),
            "gamma posterior"
        );

        let predictive = self.strategy.sample(rng, prior, &posterior, n)?;
        let rates = posterior.sample_rates(rng, n)?;

        let frequencies = frequency_table(y)?;
        let fixed_rate_fit = fixed_rate
            .map(|rate| FixedRateFit::new(rate, &frequencies))
            .transpose()?;

        Ok(GroupDraws {
            posterior,
            rates,
            predictive,
            frequencies,
            fixed_rate_fit,
        })
    }
}

fn as_f64(counts: &[u64]) -> Vec<f64> {
    counts.iter().map(|&c| c as f64).collect()
}

/// Posterior and predictive draws for one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupDraws {
    pub posterior: GammaPosterior,
    /// Posterior draws of θ
    pub rates: Vec<f64>,
    /// Predictive draws of a new count
    pub predictive: Vec<u64>,
    /// Empirical frequency table of the observed counts
    pub frequencies: FrequencyTable,
    pub fixed_rate_fit: Option<FixedRateFit>,
}

/// Credible intervals for θ2 − θ1 and ỹ2 − ỹ1
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DifferenceIntervals {
    pub rate: CredibleInterval,
    pub predictive: CredibleInterval,
}

/// Everything computed by one comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GammaPoissonResult {
    pub sample_size: usize,
    pub strategy: PredictiveStrategy,
    pub groups: [GroupDraws; 2],
    /// Paired θ2 − θ1 per draw
    pub rate_difference: Vec<f64>,
    /// Paired ỹ2 − ỹ1 per draw
    pub predictive_difference: Vec<f64>,
    pub rate_difference_mean: f64,
    pub predictive_difference_mean: f64,
    /// P(θ2 > θ1)
    pub prob_rate2_greater: f64,
    /// P(ỹ2 > ỹ1)
    pub prob_predictive2_greater: f64,
    pub intervals: Option<DifferenceIntervals>,
    pub zero_one_check: ZeroOneCheck,
}

impl GammaPoissonResult {
    pub fn group1(&self) -> &GroupDraws {
        &self.groups[0]
    }

    pub fn group2(&self) -> &GroupDraws {
        &self.groups[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// Generator that counts every value it hands out
    struct CountingRng {
        inner: ChaCha8Rng,
        calls: usize,
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.calls += 1;
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.calls += 1;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.calls += 1;
            self.inner.fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            self.calls += 1;
            self.inner.try_fill_bytes(dest)
        }
    }

    fn analysis(n: usize) -> GammaPoissonAnalysis {
        GammaPoissonAnalysis::new(
            SampleSize::new(n).unwrap(),
            GammaPrior::new(2.0, 1.0).unwrap(),
            GammaPrior::new(2.0, 1.0).unwrap(),
        )
    }

    #[test]
    fn test_all_collections_have_sample_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = analysis(300)
            .with_strategy(PredictiveStrategy::TwoStagePrior)
            .run_with_rng(&mut rng, &[0, 1, 2, 1], &[3, 2, 4])
            .unwrap();

        for group in &result.groups {
            assert_eq!(group.rates.len(), 300);
            assert_eq!(group.predictive.len(), 300);
        }
        assert_eq!(result.rate_difference.len(), 300);
        assert_eq!(result.predictive_difference.len(), 300);
        assert_eq!(result.zero_one_check.replicates.len(), 300);
        assert!(result.intervals.is_none());
    }

    #[test]
    fn test_differences_are_paired() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let result = analysis(50)
            .run_with_rng(&mut rng, &[1, 1], &[2, 2])
            .unwrap();
        for i in 0..50 {
            assert_eq!(
                result.rate_difference[i],
                result.group2().rates[i] - result.group1().rates[i]
            );
            assert_eq!(
                result.predictive_difference[i],
                result.group2().predictive[i] as f64 - result.group1().predictive[i] as f64
            );
        }
    }

    #[test]
    fn test_rate_difference_tracks_posteriors() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let y1 = vec![1_u64; 40];
        let y2 = vec![3_u64; 40];
        let result = analysis(20_000).run_with_rng(&mut rng, &y1, &y2).unwrap();

        let expected = result.group2().posterior.mean() - result.group1().posterior.mean();
        assert_abs_diff_eq!(result.rate_difference_mean, expected, epsilon = 0.03);
        assert!(result.prob_rate2_greater > 0.99);
    }

    #[test]
    fn test_fixed_rate_fit_per_group() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let result = analysis(10)
            .with_fixed_rate(1.0)
            .run_with_rng(&mut rng, &[0, 0, 1], &[2, 5])
            .unwrap();
        let fit1 = result.group1().fixed_rate_fit.as_ref().unwrap();
        let fit2 = result.group2().fixed_rate_fit.as_ref().unwrap();
        assert_eq!(fit1.points.len(), 2);
        assert_eq!(fit2.points.len(), 2);
    }

    #[test]
    fn test_validation_happens_first() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert!(matches!(
            analysis(10).run_with_rng(&mut rng, &[], &[1]),
            Err(Error::InvalidDataVector(_))
        ));
        assert!(matches!(
            analysis(10)
                .with_fixed_rate(f64::INFINITY)
                .run_with_rng(&mut rng, &[1], &[1]),
            Err(Error::InvalidScalarParameter { .. })
        ));
    }

    #[test]
    fn test_zero_replications_rejected_before_sampling() {
        let mut rng = CountingRng {
            inner: ChaCha8Rng::seed_from_u64(6),
            calls: 0,
        };
        let err = analysis(1000)
            .with_replications(0)
            .run_with_rng(&mut rng, &[0, 1, 2], &[1, 3]);
        assert!(matches!(err, Err(Error::InvalidSampleSize(_))));
        assert_eq!(rng.calls, 0);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let a = analysis(100).with_seed(99).run(&[1, 2], &[3]).unwrap();
        let b = analysis(100).with_seed(99).run(&[1, 2], &[3]).unwrap();
        assert_eq!(a, b);
    }
}
