//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use passgen_core::PassgenError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (wordlist, config)
    NotFound { message: String, hint: String },

    /// Generation settings rejected by validation
    InvalidInput { message: String, hint: String },

    /// Tight-fit filtering found no candidate word
    NoSuitableWord { message: String, hint: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint }
            | CliError::InvalidInput { message, hint }
            | CliError::NoSuitableWord { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error pointing at `--help`.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: "Hint: Run `passgen --help` for the accepted ranges.".to_string(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::NoSuitableWord { .. } => exit_codes::NO_SUITABLE_WORD,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}

impl From<PassgenError> for CliError {
    fn from(err: PassgenError) -> Self {
        let message = err.to_string();
        match err {
            PassgenError::InvalidConfiguration { .. } => CliError::invalid_input(message),
            PassgenError::NoSuitableWord { .. } => CliError::NoSuitableWord {
                message,
                hint: "Hint: Widen the --minchar/--maxchar window or use a larger wordlist."
                    .to_string(),
            },
            PassgenError::EmptyCorpus | PassgenError::Wordlist(_) => CliError::not_found(
                message,
                "Hint: Pass --wordlist with a file containing one word per line.",
            ),
        }
    }
}
