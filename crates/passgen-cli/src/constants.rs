//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Wordlist or config file not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid generation settings.
    pub const INVALID_INPUT: i32 = 4;

    /// No word fits the remaining length window.
    pub const NO_SUITABLE_WORD: i32 = 5;
}

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PASSGEN_LOG";

/// Log filter used when `PASSGEN_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";
