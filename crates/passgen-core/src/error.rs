//! Error types for passphrase generation.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to exit codes and user-facing hints.

use thiserror::Error;

use crate::config::ConfigRule;

/// Result type alias for passgen operations.
pub type Result<T> = std::result::Result<T, PassgenError>;

/// Core error type for passgen operations.
#[derive(Debug, Error)]
pub enum PassgenError {
    /// A generation setting violates one of the validation rules
    #[error("Invalid configuration: {rule}")]
    InvalidConfiguration { rule: ConfigRule },

    /// Tight-fit filtering left no candidate words
    #[error(
        "No word in the corpus is longer than {longer_than} and shorter than {shorter_than} characters"
    )]
    NoSuitableWord { longer_than: i64, shorter_than: i64 },

    /// The word corpus has no usable entries
    #[error("Word corpus is empty")]
    EmptyCorpus,

    /// Reading a wordlist failed
    #[error("Wordlist error: {0}")]
    Wordlist(String),
}

impl PassgenError {
    /// Returns the violated rule for configuration errors.
    pub fn rule(&self) -> Option<ConfigRule> {
        match self {
            PassgenError::InvalidConfiguration { rule } => Some(*rule),
            _ => None,
        }
    }
}

impl From<ConfigRule> for PassgenError {
    fn from(rule: ConfigRule) -> Self {
        PassgenError::InvalidConfiguration { rule }
    }
}

impl From<std::io::Error> for PassgenError {
    fn from(err: std::io::Error) -> Self {
        PassgenError::Wordlist(err.to_string())
    }
}
