//! Pseudorandom source shared by both simulations.
//!
//! The generator is cheap and deterministic; fresh noise from an
//! [`EntropySource`] is folded in once per tick so the flame pattern does not
//! repeat after a power cycle.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

const DEFAULT_SEED: u64 = 0x5EED_F12E;

/// Raw noise supplier, e.g. an ADC sampling a floating pin
pub trait EntropySource {
    /// Read one noise sample
    fn sample(&mut self) -> u16;
}

/// Small fast generator with entropy mixing
#[derive(Debug, Clone)]
pub struct FireRng {
    inner: SmallRng,
}

impl FireRng {
    pub fn new() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Fold a noise sample into the generator state
    pub fn add_entropy(&mut self, sample: u16) {
        let seed = self.inner.next_u64() ^ u64::from(sample);
        self.inner = SmallRng::seed_from_u64(seed);
    }
}

impl Default for FireRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for FireRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.inner.fill_bytes(dst);
    }
}

/// Entropy source that never contributes any noise
///
/// Useful when the board has no spare analog pin.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEntropy;

impl EntropySource for NoEntropy {
    fn sample(&mut self) -> u16 {
        0
    }
}
