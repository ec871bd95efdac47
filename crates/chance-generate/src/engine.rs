use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use chance_core::{CharacterPoolOptions, Result};

use crate::model::ChanceConfig;
use crate::primitives::{self, DEFAULT_LIKELIHOOD};
use crate::text;

/// Seeded generator exposing every operation with its usual defaults.
///
/// Two instances built with the same seed produce the same sequence of
/// values for the same sequence of calls.
#[derive(Debug, Clone)]
pub struct Chance {
    rng: ChaCha8Rng,
    seed: u64,
    pool: CharacterPoolOptions,
}

impl Chance {
    pub fn new(config: ChanceConfig) -> Self {
        let (seed, source) = match config.seed {
            Some(seed) => (seed, "config"),
            None => (rand::rng().random(), "entropy"),
        };
        info!(seed, source, "chance generator ready");
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            pool: config.pool,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(ChanceConfig::with_seed(seed))
    }

    /// Seed in use, handy for replaying an entropy-seeded run.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn boolean(&mut self, likelihood: i64) -> Result<bool> {
        primitives::boolean(&mut self.rng, likelihood)
    }

    pub fn boolean_default(&mut self) -> Result<bool> {
        primitives::boolean(&mut self.rng, DEFAULT_LIKELIHOOD)
    }

    /// Character from the configured pool.
    pub fn character(&mut self) -> Result<char> {
        primitives::character(&mut self.rng, &self.pool)
    }

    pub fn character_with(&mut self, options: &CharacterPoolOptions) -> Result<char> {
        primitives::character(&mut self.rng, options)
    }

    pub fn integer(&mut self, start: i64, end: i64) -> Result<i64> {
        primitives::integer(&mut self.rng, start, end)
    }

    pub fn floating(&mut self, start: f64, end: f64) -> Result<f64> {
        primitives::floating(&mut self.rng, start, end)
    }

    /// String of `length` characters from the configured pool.
    pub fn randstring(&mut self, length: usize) -> Result<String> {
        primitives::randstring(&mut self.rng, length, &self.pool)
    }

    pub fn randstring_with(
        &mut self,
        length: usize,
        options: &CharacterPoolOptions,
    ) -> Result<String> {
        primitives::randstring(&mut self.rng, length, options)
    }

    pub fn syllable(&mut self, length: usize) -> Result<String> {
        text::syllable(&mut self.rng, length)
    }

    pub fn word(&mut self, length: usize, syllables: usize) -> Result<String> {
        text::word(&mut self.rng, length, syllables)
    }

    pub fn sentence(&mut self, length: usize, words: usize) -> Result<String> {
        text::sentence(&mut self.rng, length, words)
    }
}

impl Default for Chance {
    fn default() -> Self {
        Self::new(ChanceConfig::default())
    }
}
