use rand::{rngs::StdRng, SeedableRng};

// Debug builds replay the same games unless a seed is given.
#[cfg(debug_assertions)]
const DEFAULT_SEED: Option<u64> = Some(63);

#[cfg(not(debug_assertions))]
const DEFAULT_SEED: Option<u64> = None;

pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed.or(DEFAULT_SEED) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
