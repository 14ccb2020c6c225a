//! Deterministic random number generation for the first-turn draw.
//!
//! Same seed, same sequence of starting symbols: games are replayable in
//! tests while `from_entropy` keeps production starts unpredictable.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::symbol::Symbol;

/// Seeded RNG wrapping ChaCha8.
///
/// The engine draws exactly one value per game: the starting symbol.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a new RNG seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Draw the starting symbol: an unbiased 50/50 pick between `X` and `O`.
    pub fn starting_symbol(&mut self) -> Symbol {
        if self.inner.gen_bool(0.5) {
            Symbol::X
        } else {
            Symbol::O
        }
    }
}
