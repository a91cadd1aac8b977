//! Core types for conjugate-prior Bayesian analysis
//!
//! This crate provides the pieces every model crate shares:
//!
//! - **Errors**: one [`Error`] enum covering input validation and numerical failures
//! - **Validation**: [`is_valid_vector`] and the typed wrappers built on it
//! - **Statistics**: sums, means, sample variances and paired differences
//! - **Randomness**: seeded generator construction
//!
//! # Example
//!
//! ```rust
//! use conjugate_core::{SampleSize, utils::SufficientStats};
//!
//! let n = SampleSize::new(1000).unwrap();
//! let stats = SufficientStats::from_slice(&[1.0, 2.0, 3.0]);
//!
//! assert_eq!(n.get(), 1000);
//! assert_eq!(stats.n, 3);
//! ```

pub mod error;
pub mod rng;
pub mod utils;
pub mod validation;

// Re-export core types
pub use error::{Error, Result};
pub use rng::seeded_rng;
pub use utils::SufficientStats;
pub use validation::{is_valid_vector, SampleSize};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
