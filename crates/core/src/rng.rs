//! RNG module - seeded spawn draws
//!
//! All randomness in a session goes through one [`SpawnRng`], a PCG32 stream
//! seeded once at session creation. The same seed replays the same spawns,
//! which keeps the game loop deterministic under test.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::types::{BlockColor, SPAWN_MAX_X, SPAWN_MIN_X};

/// Seeded random source for block spawns.
#[derive(Debug, Clone)]
pub struct SpawnRng {
    seed: u64,
    rng: Pcg32,
}

impl SpawnRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Bernoulli draw for "does this tick spawn a block".
    ///
    /// `chance` outside `[0, 1]` is clamped rather than rejected.
    pub fn should_spawn(&mut self, chance: f64) -> bool {
        if chance.is_nan() || chance <= 0.0 {
            return false;
        }
        self.rng.random_bool(chance.min(1.0))
    }

    /// Horizontal spawn position in `[SPAWN_MIN_X, SPAWN_MAX_X)`.
    pub fn spawn_x(&mut self) -> f32 {
        self.rng.random_range(SPAWN_MIN_X..SPAWN_MAX_X)
    }

    /// Uniform pick from the two-color palette.
    pub fn color(&mut self) -> BlockColor {
        BlockColor::ALL[self.rng.random_range(0..BlockColor::ALL.len())]
    }

    /// Seed the stream was created from (for restarting with the same sequence).
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SpawnRng {
    fn default() -> Self {
        Self::new(1)
    }
}
