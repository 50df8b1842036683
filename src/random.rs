use rand::RngExt;
use rand::rng;

use crate::config::Mode;

pub const RANDOM_COUNT: usize = 10;

/// Draws [`RANDOM_COUNT`] numbers from the thread-local RNG.
///
/// Not for anything security sensitive. Safe mode samples `0..=5`; vulnerable
/// mode samples the half-open `0..10`, the upper bound is never produced.
pub fn random_numbers(mode: Mode) -> Vec<u32> {
    let mut rng = rng();

    (0..RANDOM_COUNT)
        .map(|_| match mode {
            Mode::Safe => rng.random_range(0..=5),
            Mode::Vulnerable => rng.random_range(0..10),
        })
        .collect()
}
