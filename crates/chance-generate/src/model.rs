use serde::{Deserialize, Serialize};

use chance_core::{CharacterPoolOptions, build_pool};

use crate::errors::GenerateError;

/// Options for a [`crate::Chance`] generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChanceConfig {
    /// Seed for reproducible output. A fresh one is drawn when absent.
    pub seed: Option<u64>,
    /// Pool used by `character` and `randstring` when no options are given.
    pub pool: CharacterPoolOptions,
}

impl ChanceConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse a TOML document such as:
    ///
    /// ```toml
    /// seed = 42
    ///
    /// [pool]
    /// casing = "lower"
    /// alpha_only = true
    /// ```
    pub fn from_toml_str(input: &str) -> Result<Self, GenerateError> {
        let config: ChanceConfig = toml::from_str(input)?;
        build_pool(&config.pool)?;
        Ok(config)
    }
}
