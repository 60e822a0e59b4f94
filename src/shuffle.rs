//! Deck shuffling algorithms.

use rand::Rng;
use rand::seq::SliceRandom;

/// Number of full passes made by [`ShuffleMode::Legacy`].
pub const LEGACY_SHUFFLE_PASSES: usize = 10;

/// Shuffle algorithm used when a deck is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShuffleMode {
    /// Ten full swap passes where each position trades places with a random
    /// index drawn from every position except the last.
    ///
    /// Not a uniform permutation. Kept for parity with how the table has
    /// always dealt.
    #[default]
    Legacy,
    /// Fisher-Yates shuffle.
    Uniform,
}

/// Shuffles `items` in place using the given algorithm.
///
/// Slices with fewer than two elements are left untouched.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], mode: ShuffleMode, rng: &mut R) {
    match mode {
        ShuffleMode::Legacy => legacy_shuffle(items, rng),
        ShuffleMode::Uniform => items.shuffle(rng),
    }
}

/// Runs [`LEGACY_SHUFFLE_PASSES`] passes over `items`, swapping each position
/// with one chosen uniformly from `0..len - 1`.
pub fn legacy_shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let len = items.len();
    if len < 2 {
        return;
    }

    let last = len - 1;
    for _ in 0..LEGACY_SHUFFLE_PASSES {
        for current in 0..len {
            let target = rng.random_range(0..last);
            items.swap(current, target);
        }
    }
}
