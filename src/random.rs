//! Uniform random source used for the base color and palette jitter.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A stream of uniform values in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapts any `rand` generator into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<ThreadRng> {
    /// Backed by the thread-local generator.
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible stream for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// A uniformly random `#RRGGBB` color, one digit at a time.
pub fn random_hex(rng: &mut impl RandomSource) -> String {
    let mut hex = String::with_capacity(7);
    hex.push('#');
    for _ in 0..6 {
        let idx = ((rng.next_unit() * 16.0) as usize).min(15);
        hex.push(char::from(HEX_DIGITS[idx]));
    }
    hex
}
