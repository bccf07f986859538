//! Uniform randomization: result-order shuffling and preview sampling.
//!
//! Uniformity is the only requirement here; the RNG does not need to be
//! cryptographically secure.

use rand::seq::{IndexedRandom, SliceRandom};

/// Shuffle in place with an unbiased Fisher-Yates permutation.
pub fn shuffle<T>(items: &mut [T]) {
    items.shuffle(&mut rand::rng());
}

/// Uniform draw from a slice. Returns None on an empty slice.
pub fn pick<T>(items: &[T]) -> Option<&T> {
    items.choose(&mut rand::rng())
}
