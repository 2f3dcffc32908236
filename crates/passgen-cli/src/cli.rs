use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use passgen_core::VERSION;

/// Passgen - memorable passphrases from dictionary words, as in
/// https://www.xkcd.com/936/
#[derive(Parser)]
#[command(name = "passgen")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Wordlist file, one word per line (default: built-in English list)
    #[arg(short, long, global = true, env = "PASSGEN_WORDLIST", value_name = "PATH")]
    pub wordlist: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true, env = "PASSGEN_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

/// Generation flags. Unset flags fall back to the config file, then to the
/// built-in defaults.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Suggested number of words. If --minchar or --maxchar is given this may
    /// be exceeded or cut short to reach a suitable length [default: 4]
    #[arg(
        short = 'n',
        long = "number-of-words",
        visible_alias = "numwords",
        value_name = "N",
        allow_negative_numbers = true
    )]
    pub number_of_words: Option<i64>,

    /// Minimum number of characters in the passphrase
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub minchar: Option<i64>,

    /// Maximum number of characters in the passphrase
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub maxchar: Option<i64>,

    /// Probability of a special character between words, 0 to 1 [default: 0]
    #[arg(long = "special-character", value_name = "P", allow_negative_numbers = true)]
    pub special_character: Option<f64>,

    /// Probability that a word is capitalised, 0 to 1 [default: 0]
    #[arg(long, value_name = "P", allow_negative_numbers = true)]
    pub capitalize: Option<f64>,

    /// Probability of a number between words, 0 to 1 [default: 0]
    #[arg(long = "special-number", value_name = "P", allow_negative_numbers = true)]
    pub special_number: Option<f64>,

    /// Probability that an iteration adds no word, allowing runs of special
    /// characters. At least 0 and less than 1 [default: 0]
    #[arg(long = "wordless-iteration", value_name = "P", allow_negative_numbers = true)]
    pub wordless_iteration: Option<f64>,

    /// Below this gap between --maxchar and --minchar, words are pre-filtered
    /// by length near the end [default: 4]
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub max_min_gap_threshold: Option<i64>,

    /// Distance to --minchar at which length filtering starts [default: 6]
    #[arg(long = "short-gap-threshold", value_name = "N", allow_negative_numbers = true)]
    pub short_gap_threshold: Option<i64>,

    /// Number of passphrases to print
    #[arg(
        short,
        long,
        default_value_t = 1,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub count: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
