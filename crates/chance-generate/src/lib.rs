//! Random fake-data generation for Chance.
//!
//! Free functions take any [`RandomSource`] (every `rand::Rng` is one); the
//! [`Chance`] facade owns a seeded `ChaCha8Rng` for reproducible runs.

pub mod engine;
pub mod errors;
pub mod model;
pub mod primitives;
pub mod random;
pub mod text;

pub use engine::Chance;
pub use errors::GenerateError;
pub use model::ChanceConfig;
pub use primitives::{boolean, character, floating, integer, randstring};
pub use random::RandomSource;
pub use text::{sentence, syllable, word};
