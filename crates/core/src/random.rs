//! Gameplay randomness with no reproducibility contract.
//!
//! Used for dice rolls and bonus-letter picks. Anything that must be stable
//! across runs goes through [`crate::shuffle`] instead.

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};

/// Uniform integer in `[min, max]` (bounds may be given in either order).
///
/// Seeds a fresh `StdRng` from the OS entropy source; if that source is
/// unavailable the thread-local RNG is used instead.
pub fn random_int(min: i64, max: i64) -> i64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };

    let mut seed = [0u8; 32];
    match OsRng.try_fill_bytes(&mut seed) {
        Ok(()) => StdRng::from_seed(seed).gen_range(lo..=hi),
        Err(_) => rand::thread_rng().gen_range(lo..=hi),
    }
}

/// Pick a random element of a slice.
pub fn random_choice<T>(items: &[T]) -> Option<&T> {
    if items.is_empty() {
        return None;
    }
    let last = (items.len() - 1) as i64;
    items.get(random_int(0, last) as usize)
}
