//! Passgen CLI - memorable passphrases from dictionary words
//!
//! This is the command-line interface for Passgen. It resolves settings from
//! flags, the config file and built-in defaults, then drives the core
//! library's passphrase builder.

mod cli;
mod config;
mod constants;
mod errors;
mod output;
mod settings;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use passgen_core::{PassphraseBuilder, RngSource};

use crate::cli::{Cli, Commands};
use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV};
use crate::errors::CliError;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    if let Err(err) = run(&cli) {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            cli_err.exit();
        }
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn init_tracing(quiet: bool) {
    let fallback = if quiet { "error" } else { DEFAULT_LOG_FILTER };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = Cli::command();
        generate(*shell, &mut cmd, "passgen", &mut std::io::stdout());
        return Ok(());
    }

    let file = settings::load_config(cli)?;
    let generation = settings::apply_flags(file.generation.clone(), &cli.generate);
    let corpus = settings::load_corpus(settings::wordlist_path(cli, &file))?;

    let builder = PassphraseBuilder::new(&corpus, &generation).map_err(CliError::from)?;
    tracing::debug!(
        words = corpus.len(),
        count = cli.generate.count,
        tight_fit = builder.limits().is_tight_fit(),
        "generating passphrases"
    );

    let mut rng = RngSource::system();
    let passphrases = (0..cli.generate.count)
        .map(|_| builder.generate(&mut rng).map_err(CliError::from))
        .collect::<Result<Vec<_>, _>>()?;

    for passphrase in &passphrases {
        tracing::debug!(
            length = passphrase.len(),
            words = passphrase.words(),
            exit = passphrase.exit().as_str(),
            "passphrase built"
        );
    }

    let text = output::render(&passphrases, cli.generate.json)?;
    println!("{}", text.as_str());
    Ok(())
}
