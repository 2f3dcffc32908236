//! Resolve generation settings from defaults, the config file and flags.

use std::path::PathBuf;

use passgen_core::{GenerationConfig, WordCorpus};

use crate::cli::{Cli, GenerateArgs};
use crate::config::{default_config_path, read_config, PassgenConfig};
use crate::errors::CliError;

/// Load the config file named by `--config`, or the default one if present.
///
/// An explicit path must exist; the default path may be absent.
pub fn load_config(cli: &Cli) -> anyhow::Result<PassgenConfig> {
    if let Some(path) = &cli.config {
        if !path.exists() {
            return Err(CliError::not_found(
                format!("Config not found: {}", path.display()),
                "Hint: Check the --config path or PASSGEN_CONFIG.",
            )
            .into());
        }
        return read_config(path);
    }

    match default_config_path() {
        Ok(path) if path.exists() => {
            tracing::debug!(path = %path.display(), "using default config");
            read_config(&path)
        }
        _ => Ok(PassgenConfig::default()),
    }
}

/// Flags override whatever the config file set.
pub fn apply_flags(mut config: GenerationConfig, args: &GenerateArgs) -> GenerationConfig {
    if let Some(value) = args.number_of_words {
        config.number_of_words = value;
    }
    if let Some(value) = args.minchar {
        config.min_chars = Some(value);
    }
    if let Some(value) = args.maxchar {
        config.max_chars = Some(value);
    }
    if let Some(value) = args.special_character {
        config.symbol_probability = value;
    }
    if let Some(value) = args.capitalize {
        config.uppercase_probability = value;
    }
    if let Some(value) = args.special_number {
        config.number_probability = value;
    }
    if let Some(value) = args.wordless_iteration {
        config.wordless_iteration_probability = value;
    }
    if let Some(value) = args.max_min_gap_threshold {
        config.max_min_gap_threshold = value;
    }
    if let Some(value) = args.short_gap_threshold {
        config.short_gap_word_threshold = value;
    }
    config
}

/// The wordlist path from `--wordlist`, else from the config file.
pub fn wordlist_path(cli: &Cli, file: &PassgenConfig) -> Option<PathBuf> {
    cli.wordlist
        .clone()
        .or_else(|| file.wordlist.path.as_ref().map(PathBuf::from))
}

pub fn load_corpus(path: Option<PathBuf>) -> anyhow::Result<WordCorpus> {
    let Some(path) = path else {
        return Ok(WordCorpus::embedded());
    };
    if !path.exists() {
        return Err(CliError::not_found(
            format!("Wordlist not found: {}", path.display()),
            "Hint: Pass --wordlist with a file containing one word per line.",
        )
        .into());
    }
    WordCorpus::load(&path).map_err(|e| CliError::from(e).into())
}
