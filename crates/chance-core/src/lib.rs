//! Core contracts for Chance.
//!
//! This crate holds the shared error type, the parameter guard and the
//! character pools that every generator draws from.

pub mod error;
pub mod pool;
pub mod validation;

pub use error::{Error, Result};
pub use pool::{
    CHARS_LOWER, CHARS_UPPER, CONSONANTS, Casing, CharacterPoolOptions, HEX_POOL, MAX_INT,
    MIN_INT, NUMBERS, SYMBOLS, VOWELS, build_pool,
};
pub use validation::ensure_range;
