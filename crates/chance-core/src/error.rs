use thiserror::Error;

/// Error type shared across Chance crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A parameter or a combination of parameters is out of range.
    #[error("range error: {0}")]
    Range(String),
}

impl Error {
    /// Human-readable description of the violated constraint.
    pub fn message(&self) -> &str {
        match self {
            Error::Range(message) => message,
        }
    }
}

/// Convenience alias for results returned by Chance crates.
pub type Result<T> = std::result::Result<T, Error>;
