//! Random primitives used by the generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG when a seed is given, OS entropy otherwise.
pub(crate) fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Two distinct indices in `0..group_count`, in random order (A first).
///
/// Callers guarantee `group_count >= 2`.
pub(crate) fn pick_two_groups<R: Rng + ?Sized>(rng: &mut R, group_count: usize) -> (usize, usize) {
    let picked = rand::seq::index::sample(rng, group_count, 2);
    (picked.index(0), picked.index(1))
}
