//! Random sources for bonsai generation
//!
//! Every decision the generator makes is a single bounded integer draw, so the
//! whole tree is a function of the draw sequence. Production code seeds a
//! [`SeededRng`]; tests replay scripted draws through a [`SequenceRng`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default seed used when no explicit seed is provided.
pub const DEFAULT_SEED: u64 = 42;

/// Source of uniformly distributed bounded integers.
pub trait RandomSource {
    /// Draw a value uniformly from `[0, bound)`. `bound` must be non-zero.
    fn below(&mut self, bound: u32) -> u32;

    /// Fair coin: `true` when the 0/1 draw lands on zero.
    fn coin(&mut self) -> bool {
        self.below(2) == 0
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, bound: u32) -> u32 {
        (**self).below(bound)
    }
}

/// Deterministic seeded RNG backed by `ChaCha8Rng`.
///
/// Identical seeds produce identical trees on every platform.
#[derive(Clone, Debug)]
pub struct SeededRng(ChaCha8Rng);

impl Default for SeededRng {
    fn default() -> Self {
        Self::from_seed_u64(DEFAULT_SEED)
    }
}

impl SeededRng {
    /// Create a new `SeededRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Seed from OS entropy, for one-off trees nobody needs to reproduce.
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}

impl RandomSource for SeededRng {
    fn below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0, "below() called with zero bound");
        self.0.gen_range(0..bound)
    }
}

/// Replays a fixed list of raw draws.
///
/// Each draw returns `raw % bound`, so a script can be written either as the
/// exact decision values or as arbitrary raw integers. The script wraps around
/// once exhausted; an empty script always yields zero.
#[derive(Clone, Debug, Default)]
pub struct SequenceRng {
    draws: Vec<u32>,
    cursor: usize,
    consumed: usize,
}

impl SequenceRng {
    pub fn new(draws: Vec<u32>) -> Self {
        Self {
            draws,
            cursor: 0,
            consumed: 0,
        }
    }

    /// A source whose every draw is zero.
    pub fn zeros() -> Self {
        Self::default()
    }

    /// Total number of draws served so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomSource for SequenceRng {
    fn below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0, "below() called with zero bound");
        self.consumed += 1;
        if self.draws.is_empty() {
            return 0;
        }
        let raw = self.draws[self.cursor];
        self.cursor = (self.cursor + 1) % self.draws.len();
        raw % bound
    }
}
