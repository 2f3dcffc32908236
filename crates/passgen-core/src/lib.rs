//! # Passgen Core
//!
//! Core library for Passgen - a generator of memorable passphrases built from
//! dictionary words, in the style of "correct horse battery staple".
//!
//! This crate provides the generation algorithm, its configuration and the
//! word corpus independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **config**: Generation settings and their validation rules
//! - **corpus**: The read-only word list
//! - **random**: The random source seam (`rand` in production, scripted in tests)
//! - **builder**: Word selection, length budgeting and decoration

pub mod builder;
pub mod config;
pub mod corpus;
pub mod error;
pub mod random;

pub use builder::{generate_passphrase, Exit, Passphrase, PassphraseBuilder};
pub use config::{ConfigRule, GenerationConfig, Limits};
pub use corpus::WordCorpus;
pub use error::{PassgenError, Result};
pub use random::{RandomSource, RngSource};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
