//! Random number generator construction.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Seeded generator when `seed` is set, entropy-seeded otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!("make_rng: seed={}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}
