//! Random number generator construction
//!
//! Models never touch a global generator: `run` builds one from an optional
//! seed and `run_with_rng` takes the caller's.

use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};
use tracing::debug;

/// Build a `StdRng`, drawing a fresh seed from the thread RNG when `seed` is `None`
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    debug!(seed, "seeding StdRng");
    StdRng::seed_from_u64(seed)
}
