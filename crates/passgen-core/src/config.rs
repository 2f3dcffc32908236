//! Generation configuration and its validator.
//!
//! [`GenerationConfig`] is the value object callers fill in (directly, from a
//! TOML table, or from CLI flags). Integer fields are signed so that
//! out-of-range input reaches [`GenerationConfig::validate`] and is reported
//! by rule rather than rejected by a parser. Validation yields [`Limits`], the
//! unsigned form the builder runs on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default target word count.
pub const DEFAULT_NUMBER_OF_WORDS: i64 = 4;

/// Default max/min gap below which tight-fit mode activates.
pub const DEFAULT_MAX_MIN_GAP_THRESHOLD: i64 = 4;

/// Default remaining-length gap below which tight-fit selection triggers.
pub const DEFAULT_SHORT_GAP_WORD_THRESHOLD: i64 = 6;

/// Settings for one passphrase generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Target word count (a floor, not a cap, when `min_chars` is set)
    pub number_of_words: i64,
    /// Minimum passphrase length in characters
    pub min_chars: Option<i64>,
    /// Maximum passphrase length in characters
    pub max_chars: Option<i64>,
    /// Probability of a punctuation symbol after each iteration
    pub symbol_probability: f64,
    /// Probability that an appended word starts upper-case
    pub uppercase_probability: f64,
    /// Probability of a digit after each iteration
    pub number_probability: f64,
    /// Probability that an iteration appends no word
    pub wordless_iteration_probability: f64,
    /// Tight-fit mode activates when `max_chars - min_chars` is below this
    pub max_min_gap_threshold: i64,
    /// In tight-fit mode, the distance to `min_chars` that triggers filtering
    pub short_gap_word_threshold: i64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            number_of_words: DEFAULT_NUMBER_OF_WORDS,
            min_chars: None,
            max_chars: None,
            symbol_probability: 0.0,
            uppercase_probability: 0.0,
            number_probability: 0.0,
            wordless_iteration_probability: 0.0,
            max_min_gap_threshold: DEFAULT_MAX_MIN_GAP_THRESHOLD,
            short_gap_word_threshold: DEFAULT_SHORT_GAP_WORD_THRESHOLD,
        }
    }
}

impl GenerationConfig {
    pub fn with_number_of_words(mut self, number_of_words: i64) -> Self {
        self.number_of_words = number_of_words;
        self
    }

    pub fn with_min_chars(mut self, min_chars: i64) -> Self {
        self.min_chars = Some(min_chars);
        self
    }

    pub fn with_max_chars(mut self, max_chars: i64) -> Self {
        self.max_chars = Some(max_chars);
        self
    }

    pub fn with_symbol_probability(mut self, probability: f64) -> Self {
        self.symbol_probability = probability;
        self
    }

    pub fn with_uppercase_probability(mut self, probability: f64) -> Self {
        self.uppercase_probability = probability;
        self
    }

    pub fn with_number_probability(mut self, probability: f64) -> Self {
        self.number_probability = probability;
        self
    }

    pub fn with_wordless_iteration_probability(mut self, probability: f64) -> Self {
        self.wordless_iteration_probability = probability;
        self
    }

    pub fn with_max_min_gap_threshold(mut self, threshold: i64) -> Self {
        self.max_min_gap_threshold = threshold;
        self
    }

    pub fn with_short_gap_word_threshold(mut self, threshold: i64) -> Self {
        self.short_gap_word_threshold = threshold;
        self
    }

    /// Check every rule in a fixed order and return the first violation.
    ///
    /// The order is part of the contract: the same invalid config always
    /// reports the same rule.
    pub fn validate(&self) -> Result<Limits, ConfigRule> {
        let probabilities = [
            (ProbabilityField::Symbol, self.symbol_probability),
            (ProbabilityField::Uppercase, self.uppercase_probability),
            (ProbabilityField::Number, self.number_probability),
            (
                ProbabilityField::WordlessIteration,
                self.wordless_iteration_probability,
            ),
        ];
        for (field, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigRule::ProbabilityOutOfRange(field));
            }
        }

        if self.wordless_iteration_probability >= 1.0 {
            return Err(ConfigRule::WordlessIterationCertain);
        }

        if matches!(self.min_chars, Some(min) if min < 1) {
            return Err(ConfigRule::MinCharsNotPositive);
        }

        if matches!(self.max_chars, Some(max) if max < 1) {
            return Err(ConfigRule::MaxCharsNotPositive);
        }

        if self.number_of_words < 1 {
            return Err(ConfigRule::NumberOfWordsNotPositive);
        }

        if let (Some(min), Some(max)) = (self.min_chars, self.max_chars) {
            if max < min {
                return Err(ConfigRule::MaxBelowMin);
            }
        }

        if self.max_min_gap_threshold < 0 {
            return Err(ConfigRule::NegativeGapThreshold);
        }

        if self.short_gap_word_threshold < 1 {
            return Err(ConfigRule::ShortGapThresholdNotPositive);
        }

        Ok(Limits {
            number_of_words: to_usize(self.number_of_words),
            min_chars: self.min_chars.map(to_usize),
            max_chars: self.max_chars.map(to_usize),
            symbol_probability: self.symbol_probability,
            uppercase_probability: self.uppercase_probability,
            number_probability: self.number_probability,
            wordless_iteration_probability: self.wordless_iteration_probability,
            max_min_gap_threshold: to_usize(self.max_min_gap_threshold),
            short_gap_word_threshold: to_usize(self.short_gap_word_threshold),
        })
    }
}

// Only called on values validation has proven non-negative.
fn to_usize(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// A validated configuration.
///
/// Only obtainable through [`GenerationConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Limits {
    pub(crate) number_of_words: usize,
    pub(crate) min_chars: Option<usize>,
    pub(crate) max_chars: Option<usize>,
    pub(crate) symbol_probability: f64,
    pub(crate) uppercase_probability: f64,
    pub(crate) number_probability: f64,
    pub(crate) wordless_iteration_probability: f64,
    pub(crate) max_min_gap_threshold: usize,
    pub(crate) short_gap_word_threshold: usize,
}

impl Limits {
    pub fn number_of_words(&self) -> usize {
        self.number_of_words
    }

    pub fn min_chars(&self) -> Option<usize> {
        self.min_chars
    }

    pub fn max_chars(&self) -> Option<usize> {
        self.max_chars
    }

    /// Whether the allowed length window is narrow enough for tight-fit mode.
    pub fn is_tight_fit(&self) -> bool {
        match (self.min_chars, self.max_chars) {
            (Some(min), Some(max)) => max - min < self.max_min_gap_threshold,
            _ => false,
        }
    }
}

/// Probability fields, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbabilityField {
    Symbol,
    Uppercase,
    Number,
    WordlessIteration,
}

impl ProbabilityField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbabilityField::Symbol => "symbol_probability",
            ProbabilityField::Uppercase => "uppercase_probability",
            ProbabilityField::Number => "number_probability",
            ProbabilityField::WordlessIteration => "wordless_iteration_probability",
        }
    }
}

/// A validation rule that a [`GenerationConfig`] failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigRule {
    /// A probability is outside [0, 1]
    ProbabilityOutOfRange(ProbabilityField),
    /// Wordless iterations would happen every time
    WordlessIterationCertain,
    MinCharsNotPositive,
    MaxCharsNotPositive,
    NumberOfWordsNotPositive,
    /// `max_chars` is smaller than `min_chars`
    MaxBelowMin,
    NegativeGapThreshold,
    ShortGapThresholdNotPositive,
}

impl fmt::Display for ConfigRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigRule::ProbabilityOutOfRange(field) => {
                write!(f, "{} must be between 0 and 1", field.as_str())
            }
            ConfigRule::WordlessIterationCertain => {
                write!(f, "wordless_iteration_probability must be less than 1")
            }
            ConfigRule::MinCharsNotPositive => write!(f, "min_chars must be a positive integer"),
            ConfigRule::MaxCharsNotPositive => write!(f, "max_chars must be a positive integer"),
            ConfigRule::NumberOfWordsNotPositive => {
                write!(f, "number_of_words must be a positive integer")
            }
            ConfigRule::MaxBelowMin => write!(f, "max_chars cannot be less than min_chars"),
            ConfigRule::NegativeGapThreshold => {
                write!(f, "max_min_gap_threshold cannot be negative")
            }
            ConfigRule::ShortGapThresholdNotPositive => {
                write!(f, "short_gap_word_threshold must be a positive integer")
            }
        }
    }
}
