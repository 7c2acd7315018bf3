//! Pseudo-random numbers for scene setup.
//!
//! Only the initial state of the scenes is random (spiral targets and
//! velocities, line art grid cells); the per-frame simulation itself is
//! deterministic.

/// A pseudo-random number generator using Marsaglia's xorshift algorithm,
/// yielding 64 bits of randomness per step.
///
/// The period is 2<sup>64</sup>-1: every nonzero `u64` is generated once
/// before the sequence repeats. A zero state would be a fixed point, so
/// seeds are never zero.
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct Xorshift64(u64);

impl Xorshift64 {
    /// Seed used by [`Xorshift64::default()`].
    pub const DEFAULT_SEED: u64 = 378682147834061;

    /// Returns a new generator seeded by `seed`.
    ///
    /// Two generators created with the same seed yield the same sequence.
    ///
    /// # Panics
    /// If `seed` equals 0.
    pub fn from_seed(seed: u64) -> Self {
        assert_ne!(seed, 0, "xorshift seed cannot be zero");
        Self(seed)
    }

    /// Returns a new generator seeded by the current system time.
    #[cfg(feature = "std")]
    pub fn from_time() -> Self {
        let seed = std::time::SystemTime::UNIX_EPOCH
            .elapsed()
            .map(|t| t.as_micros() as u64)
            .unwrap_or(Self::DEFAULT_SEED);
        Self(if seed == 0 { Self::DEFAULT_SEED } else { seed })
    }

    /// Returns 64 bits of pseudo-randomness.
    pub fn next_bits(&mut self) -> u64 {
        let Self(x) = self;
        *x ^= *x << 13;
        *x ^= *x >> 7;
        *x ^= *x << 17;
        *x
    }

    /// Returns a uniformly distributed integer in `0..n`.
    ///
    /// # Panics
    /// If `n` equals 0.
    pub fn below(&mut self, n: usize) -> usize {
        assert_ne!(n, 0, "empty range");
        (self.next_bits() % n as u64) as usize
    }

    /// Returns a uniformly distributed float in `[0, 1)`.
    pub fn unit_f32(&mut self) -> f32 {
        // 24 bits is the f32 mantissa precision
        (self.next_bits() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Returns `true` or `false` with equal probability.
    pub fn coin(&mut self) -> bool {
        self.next_bits() >> 63 == 1
    }
}

impl Default for Xorshift64 {
    fn default() -> Self {
        Self(Self::DEFAULT_SEED)
    }
}
