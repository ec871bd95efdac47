use thiserror::Error;

/// Errors emitted outside of a single draw (configuration, facade setup).
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Core(#[from] chance_core::Error),
    #[error("invalid config: {0}")]
    Config(String),
}

impl From<toml::de::Error> for GenerateError {
    fn from(err: toml::de::Error) -> Self {
        GenerateError::Config(err.to_string())
    }
}
