//! Keyword-style entry point

use crate::analysis::{Groups, NormalGammaAnalysis, NormalGammaResult};
use crate::prior::NormalGammaPrior;
use conjugate_confidence::IntervalLevels;
use conjugate_core::{Error, Result, SampleSize};

/// Arguments of [`normal_gamma_inference`]
///
/// `y_2` and `y_3` are optional trailing groups; `y_3` without `y_2` is
/// rejected.
#[derive(Debug, Clone, Default)]
pub struct NormalGammaArgs<'a> {
    pub sample_size: f64,
    pub mu_0: &'a [f64],
    pub sigma_0_square: &'a [f64],
    pub kappa_0: &'a [f64],
    pub nu_0: &'a [f64],
    pub y_1: &'a [f64],
    pub y_2: Option<&'a [f64]>,
    pub y_3: Option<&'a [f64]>,
    /// Defaults to `(0.025, 0.975)`
    pub confidence_interval: Option<&'a [f64]>,
    pub seed: Option<u64>,
}

/// Posterior inference on the mean and variance of up to three groups
///
/// # Example
/// ```rust
/// use conjugate_normal::api::{normal_gamma_inference, NormalGammaArgs};
///
/// let result = normal_gamma_inference(NormalGammaArgs {
///     sample_size: 2000.0,
///     mu_0: &[0.0],
///     sigma_0_square: &[1.0],
///     kappa_0: &[1.0],
///     nu_0: &[1.0],
///     y_1: &[1.2, 0.7, 1.9],
///     y_2: Some(&[0.1, -0.4, 0.3]),
///     y_3: Some(&[2.5, 2.1, 3.0]),
///     seed: Some(3),
///     ..Default::default()
/// })
/// .unwrap();
///
/// let (theta, _) = result.orderings().unwrap();
/// assert!((theta.total() - 1.0).abs() < 1e-9);
/// ```
pub fn normal_gamma_inference(args: NormalGammaArgs<'_>) -> Result<NormalGammaResult> {
    let sample_size = SampleSize::try_from(args.sample_size)?;
    let prior =
        NormalGammaPrior::from_slices(args.mu_0, args.sigma_0_square, args.kappa_0, args.nu_0)?;
    let levels = args
        .confidence_interval
        .map(IntervalLevels::from_slice)
        .transpose()?
        .unwrap_or_default();

    let groups = match (args.y_2, args.y_3) {
        (None, None) => Groups::One(args.y_1),
        (Some(y_2), None) => Groups::Two(args.y_1, y_2),
        (Some(y_2), Some(y_3)) => Groups::Three(args.y_1, y_2, y_3),
        (None, Some(_)) => {
            return Err(Error::InvalidDataVector(
                "y_3 supplied without y_2".to_string(),
            ))
        }
    };

    let mut analysis = NormalGammaAnalysis::new(sample_size, prior).with_interval(levels);
    if let Some(seed) = args.seed {
        analysis = analysis.with_seed(seed);
    }
    analysis.run(groups)
}
