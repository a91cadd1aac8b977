//! Normal-Gamma inference for one, two or three groups

use crate::ordering::OrderingProbabilities;
use crate::prior::NormalGammaPrior;
use crate::summary::GroupSummary;
use conjugate_confidence::IntervalLevels;
use conjugate_core::{seeded_rng, validation::check_data, Result, SampleSize};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Observed data, one slice per group
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Groups<'a> {
    One(&'a [f64]),
    Two(&'a [f64], &'a [f64]),
    Three(&'a [f64], &'a [f64], &'a [f64]),
}

impl<'a> Groups<'a> {
    /// Number of groups supplied
    pub fn count(&self) -> usize {
        match self {
            Groups::One(..) => 1,
            Groups::Two(..) => 2,
            Groups::Three(..) => 3,
        }
    }

    /// Data slices in group order
    pub fn as_vec(&self) -> Vec<&'a [f64]> {
        match *self {
            Groups::One(y1) => vec![y1],
            Groups::Two(y1, y2) => vec![y1, y2],
            Groups::Three(y1, y2, y3) => vec![y1, y2, y3],
        }
    }
}

/// Configuration shared by every group of a Normal-Gamma analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalGammaAnalysis {
    sample_size: SampleSize,
    prior: NormalGammaPrior,
    interval: IntervalLevels,
    seed: Option<u64>,
}

impl NormalGammaAnalysis {
    /// Create an analysis with 95% central credible intervals
    pub fn new(sample_size: SampleSize, prior: NormalGammaPrior) -> Self {
        Self {
            sample_size,
            prior,
            interval: IntervalLevels::default(),
            seed: None,
        }
    }

    /// Probability levels of every reported credible interval
    pub fn with_interval(mut self, levels: IntervalLevels) -> Self {
        self.interval = levels;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn prior(&self) -> &NormalGammaPrior {
        &self.prior
    }

    pub fn interval(&self) -> IntervalLevels {
        self.interval
    }

    /// Run with a generator seeded from the configured seed
    pub fn run(&self, groups: Groups<'_>) -> Result<NormalGammaResult> {
        let mut rng = seeded_rng(self.seed);
        self.run_with_rng(&mut rng, groups)
    }

    /// Run with a caller-supplied generator
    #[instrument(
        skip(self, rng, groups),
        fields(sample_size = self.sample_size.get(), n_groups = groups.count())
    )]
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        groups: Groups<'_>,
    ) -> Result<NormalGammaResult> {
        for (i, y) in groups.as_vec().into_iter().enumerate() {
            check_data(&format!("y_{}", i + 1), y)?;
        }

        let result = match groups {
            Groups::One(y1) => NormalGammaResult::OneGroup(self.summarize(rng, y1)?),
            Groups::Two(y1, y2) => NormalGammaResult::TwoGroups([
                self.summarize(rng, y1)?,
                self.summarize(rng, y2)?,
            ]),
            Groups::Three(y1, y2, y3) => {
                let groups = [
                    self.summarize(rng, y1)?,
                    self.summarize(rng, y2)?,
                    self.summarize(rng, y3)?,
                ];
                let theta = OrderingProbabilities::from_paired([
                    groups[0].draws.theta.as_slice(),
                    groups[1].draws.theta.as_slice(),
                    groups[2].draws.theta.as_slice(),
                ])?;
                let predictive = OrderingProbabilities::from_paired([
                    groups[0].predictive(),
                    groups[1].predictive(),
                    groups[2].predictive(),
                ])?;
                debug!(
                    theta_group1_max = theta.group1_max,
                    predictive_group1_max = predictive.group1_max,
                    "ordering probabilities"
                );
                NormalGammaResult::ThreeGroups {
                    groups,
                    theta,
                    predictive,
                }
            }
        };
        Ok(result)
    }

    fn summarize<R: Rng + ?Sized>(&self, rng: &mut R, y: &[f64]) -> Result<GroupSummary> {
        let posterior = self.prior.update(y);
        debug!(
            n = posterior.n,
            kappa_n = posterior.kappa_n,
            mu_n = posterior.mu_n,
            nu_n = posterior.nu_n,
            sigma_n_sq = posterior.sigma_n_sq,
            "normal-gamma posterior"
        );
        let draws = posterior.sample(rng, self.sample_size.get())?;
        let summary = GroupSummary::new(posterior, draws, self.interval)?;
        debug!(
            theta_mean = summary.theta_mean,
            sigma_mean = summary.sigma_mean,
            "group summary"
        );
        Ok(summary)
    }
}

/// Result shape follows the number of groups supplied
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalGammaResult {
    OneGroup(GroupSummary),
    /// Two independent summaries; no cross-group comparison
    TwoGroups([GroupSummary; 2]),
    ThreeGroups {
        groups: [GroupSummary; 3],
        /// Orderings of θ across paired replicates
        theta: OrderingProbabilities,
        /// Orderings of ỹ across paired replicates
        predictive: OrderingProbabilities,
    },
}

impl NormalGammaResult {
    /// Per-group summaries in group order
    pub fn groups(&self) -> &[GroupSummary] {
        match self {
            NormalGammaResult::OneGroup(g) => std::slice::from_ref(g),
            NormalGammaResult::TwoGroups(gs) => gs,
            NormalGammaResult::ThreeGroups { groups, .. } => groups,
        }
    }

    /// Summary of group `index`, zero-based
    pub fn group(&self, index: usize) -> Option<&GroupSummary> {
        self.groups().get(index)
    }

    /// θ and ỹ ordering probabilities, present for three groups only
    pub fn orderings(&self) -> Option<(&OrderingProbabilities, &OrderingProbabilities)> {
        match self {
            NormalGammaResult::ThreeGroups {
                theta, predictive, ..
            } => Some((theta, predictive)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::GroupOrdering;
    use approx::assert_abs_diff_eq;
    use conjugate_core::Error;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn analysis(n: usize) -> NormalGammaAnalysis {
        NormalGammaAnalysis::new(
            SampleSize::new(n).unwrap(),
            NormalGammaPrior::new(0.0, 1.0, 1.0, 1.0).unwrap(),
        )
    }

    #[test]
    fn test_result_shape_follows_group_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let y = [1.0, 2.0, 3.0];

        let one = analysis(100).run_with_rng(&mut rng, Groups::One(&y)).unwrap();
        assert!(matches!(one, NormalGammaResult::OneGroup(_)));
        assert_eq!(one.groups().len(), 1);
        assert!(one.orderings().is_none());

        let two = analysis(100)
            .run_with_rng(&mut rng, Groups::Two(&y, &y))
            .unwrap();
        assert_eq!(two.groups().len(), 2);
        assert!(two.orderings().is_none());

        let three = analysis(100)
            .run_with_rng(&mut rng, Groups::Three(&y, &y, &y))
            .unwrap();
        assert_eq!(three.groups().len(), 3);
        assert!(three.orderings().is_some());
        for g in three.groups() {
            assert_eq!(g.draws.len(), 100);
        }
    }

    #[test]
    fn test_separated_groups_order_as_expected() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let high = [10.0, 10.5, 9.5, 10.2, 9.8];
        let mid = [5.0, 5.5, 4.5, 5.2, 4.8];
        let low = [0.0, 0.5, -0.5, 0.2, -0.2];
        let result = NormalGammaAnalysis::new(
            SampleSize::new(4_000).unwrap(),
            NormalGammaPrior::new(5.0, 1.0, 0.01, 1.0).unwrap(),
        )
        .run_with_rng(&mut rng, Groups::Three(&high, &mid, &low))
        .unwrap();

        let (theta, predictive) = result.orderings().unwrap();
        assert!(theta.probability(GroupOrdering([0, 1, 2])) > 0.99);
        assert!(theta.group1_max > 0.99);
        assert_abs_diff_eq!(theta.total(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(predictive.total(), 1.0, epsilon = 1e-12);
        assert!(predictive.group1_max > 0.95);
    }

    #[test]
    fn test_posterior_matches_hand_computation() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let result = analysis(10)
            .run_with_rng(&mut rng, Groups::One(&[1.0, 2.0, 3.0]))
            .unwrap();
        let post = result.groups()[0].posterior;
        assert_eq!(post.kappa_n, 4.0);
        assert_eq!(post.nu_n, 4.0);
        assert_eq!(post.mu_n, 1.5);
        assert_eq!(post.sigma_n_sq, 1.5);
    }

    #[test]
    fn test_empty_group_rejected_before_sampling() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let err = analysis(10).run_with_rng(&mut rng, Groups::Three(&[1.0], &[], &[2.0]));
        assert!(matches!(err, Err(Error::InvalidDataVector(_))));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let y = [0.4, 1.1, -0.3];
        let a = analysis(50).with_seed(8).run(Groups::Two(&y, &y)).unwrap();
        let b = analysis(50).with_seed(8).run(Groups::Two(&y, &y)).unwrap();
        assert_eq!(a, b);
    }
}
