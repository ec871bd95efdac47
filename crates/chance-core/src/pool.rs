use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::validation::ensure_range;

pub const NUMBERS: &str = "0123456789";
pub const CHARS_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
pub const CHARS_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lower-case hexadecimal digits, usable as a custom set.
pub const HEX_POOL: &str = "0123456789abcdef";
/// Symbol set. `[` and `]` appear twice and are drawn twice as often.
pub const SYMBOLS: &str = "!@#$%^&*()[]-=+{}[]:;\"'?/<>,.~`\\|";

/// Consonants used for syllables (hard to speak ones left out).
pub const CONSONANTS: &str = "bcdfghjklmnprstvwz";
pub const VOWELS: &str = "aeiou";

/// Largest integer bound offered to callers (`i64::MAX - 1`).
pub const MAX_INT: i64 = 9_223_372_036_854_775_806;
/// Symmetric counterpart of [`MAX_INT`].
pub const MIN_INT: i64 = -MAX_INT;

pub const POOL_CONFLICT: &str = "cannot specify both alpha_only and symbol_only";
pub const POOL_EMPTY: &str = "character pool is empty";

/// Restriction applied to the letter portion of a pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Casing {
    #[default]
    None,
    Lower,
    Upper,
}

impl Casing {
    /// Letters and digits admitted under this casing.
    pub fn letters(self) -> String {
        match self {
            Casing::Lower => [CHARS_LOWER, NUMBERS].concat(),
            Casing::Upper => [CHARS_UPPER, NUMBERS].concat(),
            Casing::None => [CHARS_UPPER, CHARS_LOWER, NUMBERS].concat(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Casing::None => "none",
            Casing::Lower => "lower",
            Casing::Upper => "upper",
        }
    }
}

impl fmt::Display for Casing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Casing {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "none" | "" => Ok(Casing::None),
            "lower" => Ok(Casing::Lower),
            "upper" => Ok(Casing::Upper),
            other => Err(Error::Range(format!(
                "casing must be one of none, lower, upper (got '{other}')"
            ))),
        }
    }
}

/// Options that shape the pool a character is drawn from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterPoolOptions {
    /// Replaces the built-in pool when non-empty.
    pub custom_set: String,
    /// Keep only letters and digits of the active casing.
    pub alpha_only: bool,
    /// Keep only symbols.
    pub symbol_only: bool,
    pub casing: Casing,
}

impl CharacterPoolOptions {
    pub fn custom(custom_set: impl Into<String>) -> Self {
        Self {
            custom_set: custom_set.into(),
            ..Self::default()
        }
    }

    pub fn with_casing(mut self, casing: Casing) -> Self {
        self.casing = casing;
        self
    }

    pub fn alpha_only(mut self) -> Self {
        self.alpha_only = true;
        self
    }

    pub fn symbol_only(mut self) -> Self {
        self.symbol_only = true;
        self
    }
}

/// Build the multiset of characters eligible for a draw.
///
/// The pool is a concatenation, so characters listed more than once keep
/// their extra weight. A non-empty `custom_set` replaces the built-in pool
/// but is still filtered by `alpha_only` / `symbol_only`.
pub fn build_pool(options: &CharacterPoolOptions) -> Result<Vec<char>> {
    ensure_range(options.alpha_only && options.symbol_only, POOL_CONFLICT)?;

    let letters = options.casing.letters();
    let source = if options.custom_set.is_empty() {
        [letters.as_str(), SYMBOLS].concat()
    } else {
        options.custom_set.clone()
    };

    let pool = if options.alpha_only {
        source.chars().filter(|ch| letters.contains(*ch)).collect()
    } else if options.symbol_only {
        source.chars().filter(|ch| SYMBOLS.contains(*ch)).collect()
    } else {
        source.chars().collect()
    };

    Ok(pool)
}
