//! Passphrase builder.
//!
//! Words are drawn from a [`WordCorpus`] one iteration at a time. Each
//! iteration may append a word (subject to `max_chars` and the wordless
//! probability) and then may append a digit and/or a symbol. Generation ends
//! at one of three named exits:
//!
//! - [`Exit::MinReached`]: the word target and `min_chars` are both met.
//! - [`Exit::Overflow`]: a drawn word did not fit and the room left under
//!   `max_chars` is below the gap threshold.
//! - [`Exit::TightFit`]: the length window is narrow and the final word was
//!   picked from the words that land inside it.

use std::fmt;

use tracing::{debug, trace};
use zeroize::Zeroize;

use crate::config::{GenerationConfig, Limits};
use crate::corpus::WordCorpus;
use crate::error::{PassgenError, Result};
use crate::random::RandomSource;

/// ASCII punctuation used for symbol decorations.
pub const PUNCTUATION: &[u8; 32] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Digit decorations are drawn from `0..DIGIT_RANGE`.
pub const DIGIT_RANGE: usize = 9;

/// Why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    MinReached,
    Overflow,
    TightFit,
}

impl Exit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exit::MinReached => "min_reached",
            Exit::Overflow => "overflow",
            Exit::TightFit => "tight_fit",
        }
    }
}

/// A generated passphrase.
///
/// The text is wiped when the value is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passphrase {
    value: String,
    chars: usize,
    words: usize,
    exit: Exit,
}

impl Passphrase {
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.chars
    }

    pub fn is_empty(&self) -> bool {
        self.chars == 0
    }

    /// Number of whole words appended.
    pub fn words(&self) -> usize {
        self.words
    }

    pub fn exit(&self) -> Exit {
        self.exit
    }
}

impl Zeroize for Passphrase {
    fn zeroize(&mut self) {
        self.value.zeroize();
        self.chars = 0;
        self.words = 0;
    }
}

impl Drop for Passphrase {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Display for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[derive(Debug, Default)]
struct State {
    value: String,
    chars: usize,
    words: usize,
}

impl State {
    fn push_str(&mut self, text: &str) {
        self.value.push_str(text);
        self.chars += text.chars().count();
    }

    fn push(&mut self, c: char) {
        self.value.push(c);
        self.chars += 1;
    }

    fn finish(mut self, exit: Exit) -> Passphrase {
        Passphrase {
            value: std::mem::take(&mut self.value),
            chars: self.chars,
            words: self.words,
            exit,
        }
    }
}

// A failed call drops a partial passphrase.
impl Drop for State {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

enum Step {
    Continue,
    Finish(Exit),
}

/// Builds passphrases from a corpus under a validated configuration.
///
/// The builder holds no per-call state; one builder can serve any number of
/// [`generate`](Self::generate) calls.
#[derive(Debug, Clone)]
pub struct PassphraseBuilder<'a> {
    corpus: &'a WordCorpus,
    limits: Limits,
}

impl<'a> PassphraseBuilder<'a> {
    /// Validate `config` and bind it to `corpus`.
    ///
    /// # Errors
    ///
    /// Returns [`PassgenError::InvalidConfiguration`] naming the first rule
    /// the config breaks.
    pub fn new(corpus: &'a WordCorpus, config: &GenerationConfig) -> Result<Self> {
        let limits = config.validate()?;
        Ok(Self { corpus, limits })
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Generate one passphrase.
    ///
    /// # Errors
    ///
    /// Returns [`PassgenError::NoSuitableWord`] when tight-fit mode finds no
    /// corpus word that lands inside the remaining length window.
    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Passphrase> {
        let tight_fit = self.limits.is_tight_fit();
        if tight_fit {
            debug!(
                min_chars = ?self.limits.min_chars,
                max_chars = ?self.limits.max_chars,
                "tight-fit mode active"
            );
        }

        let mut state = State::default();
        loop {
            match self.step(&mut state, tight_fit, rng)? {
                Step::Continue => {}
                Step::Finish(exit) => {
                    debug!(
                        exit = exit.as_str(),
                        chars = state.chars,
                        words = state.words,
                        "passphrase generated"
                    );
                    return Ok(state.finish(exit));
                }
            }
        }
    }

    fn step<R: RandomSource + ?Sized>(
        &self,
        state: &mut State,
        tight_fit: bool,
        rng: &mut R,
    ) -> Result<Step> {
        trace!(chars = state.chars, words = state.words, "iteration");

        if self.target_reached(state) {
            return Ok(Step::Finish(Exit::MinReached));
        }

        if tight_fit {
            if let Some(exit) = self.try_tight_fit(state, rng)? {
                return Ok(Step::Finish(exit));
            }
        }

        let index = rng.choose_index(self.corpus.len());
        let (word, word_len) = self.corpus.entry(index);
        let fits = self
            .limits
            .max_chars
            .map_or(true, |max| state.chars + word_len <= max);

        if fits {
            if rng.next_unit() < 1.0 - self.limits.wordless_iteration_probability {
                self.append_word(state, word, rng);
            }
        } else if self.no_room_left(state) {
            return Ok(Step::Finish(Exit::Overflow));
        }

        self.decorate(state, rng);
        Ok(Step::Continue)
    }

    fn target_reached(&self, state: &State) -> bool {
        let long_enough = self.limits.min_chars.map_or(true, |min| state.chars >= min);
        long_enough && state.words >= self.limits.number_of_words
    }

    fn no_room_left(&self, state: &State) -> bool {
        self.limits.max_chars.is_some_and(|max| {
            max.saturating_sub(state.chars) < self.limits.max_min_gap_threshold
        })
    }

    /// Near the lower bound, pick the last word from only those that land
    /// inside the window. Returns `None` while still too far from `min_chars`.
    fn try_tight_fit<R: RandomSource + ?Sized>(
        &self,
        state: &mut State,
        rng: &mut R,
    ) -> Result<Option<Exit>> {
        let (Some(min), Some(max)) = (self.limits.min_chars, self.limits.max_chars) else {
            return Ok(None);
        };

        let chars = signed(state.chars);
        let to_min = signed(min) - chars;
        let to_max = signed(max) - chars;
        if to_min >= signed(self.limits.short_gap_word_threshold) {
            return Ok(None);
        }

        let candidates = self.corpus.words_between(to_min, to_max);
        if candidates.is_empty() {
            return Err(PassgenError::NoSuitableWord {
                longer_than: to_min,
                shorter_than: to_max,
            });
        }
        trace!(candidates = candidates.len(), to_min, to_max, "tight-fit draw");

        let index = candidates[rng.choose_index(candidates.len())];
        let (word, _) = self.corpus.entry(index);
        self.append_word(state, word, rng);
        Ok(Some(Exit::TightFit))
    }

    fn append_word<R: RandomSource + ?Sized>(&self, state: &mut State, word: &str, rng: &mut R) {
        if rng.next_unit() < self.limits.uppercase_probability {
            state.push_str(&capitalize(word));
        } else {
            state.push_str(word);
        }
        state.words += 1;
    }

    // The order is drawn each iteration so neither decoration always leads.
    fn decorate<R: RandomSource + ?Sized>(&self, state: &mut State, rng: &mut R) {
        if rng.next_unit() < 0.5 {
            self.add_digit(state, rng);
            self.add_symbol(state, rng);
        } else {
            self.add_symbol(state, rng);
            self.add_digit(state, rng);
        }
    }

    fn add_digit<R: RandomSource + ?Sized>(&self, state: &mut State, rng: &mut R) {
        if self.has_room(state) && rng.next_unit() < self.limits.number_probability {
            let digit = rng.choose_index(DIGIT_RANGE) as u8;
            state.push(char::from(b'0' + digit));
        }
    }

    fn add_symbol<R: RandomSource + ?Sized>(&self, state: &mut State, rng: &mut R) {
        if self.has_room(state) && rng.next_unit() < self.limits.symbol_probability {
            let symbol = PUNCTUATION[rng.choose_index(PUNCTUATION.len())];
            state.push(char::from(symbol));
        }
    }

    fn has_room(&self, state: &State) -> bool {
        self.limits.max_chars.map_or(true, |max| state.chars < max)
    }
}

/// Validate `config` and generate one passphrase from `corpus`.
///
/// Validation runs before the first draw; an invalid config consumes nothing
/// from `rng`.
pub fn generate_passphrase<R: RandomSource + ?Sized>(
    corpus: &WordCorpus,
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Passphrase> {
    PassphraseBuilder::new(corpus, config)?.generate(rng)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
