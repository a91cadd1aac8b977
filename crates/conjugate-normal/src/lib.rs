//! Normal-Gamma conjugate inference for up to three groups
//!
//! Each group is modelled as Normal(θ, σ²) with a shared Normal-Gamma
//! prior. The closed-form posterior is sampled replicate by replicate:
//! the precision 1/σ² first, then θ given σ², then a predictive ỹ given
//! θ and σ². Summaries report θ and σ means with credible intervals.
//!
//! With three groups the paired replicates also yield the probability of
//! every strict ordering of the groups under θ and under ỹ.
//!
//! # Example
//!
//! ```rust
//! use conjugate_core::SampleSize;
//! use conjugate_normal::{Groups, NormalGammaAnalysis, NormalGammaPrior};
//!
//! let prior = NormalGammaPrior::new(0.0, 1.0, 1.0, 1.0).unwrap();
//! let result = NormalGammaAnalysis::new(SampleSize::new(1000).unwrap(), prior)
//!     .with_seed(11)
//!     .run(Groups::Two(&[1.0, 2.0, 3.0], &[2.5, 3.5]))
//!     .unwrap();
//!
//! for group in result.groups() {
//!     println!("θ: {}", group.theta_interval);
//! }
//! ```

pub mod analysis;
pub mod api;
pub mod ordering;
pub mod prior;
pub mod sampler;
pub mod summary;

pub use analysis::{Groups, NormalGammaAnalysis, NormalGammaResult};
pub use api::{normal_gamma_inference, NormalGammaArgs};
pub use ordering::{GroupOrdering, OrderingProbabilities};
pub use prior::{NormalGammaPosterior, NormalGammaPrior};
pub use sampler::PosteriorDraws;
pub use summary::GroupSummary;
