//! Word corpus: the immutable list of candidate words.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use crate::error::{PassgenError, Result};

static EMBEDDED_WORDLIST: &str = include_str!("../wordlists/english.txt");

#[derive(Debug, Clone, PartialEq, Eq)]
struct Word {
    text: String,
    chars: usize,
}

/// An ordered, de-duplicated, read-only list of words.
///
/// Cloning is cheap; clones share the same storage.
#[derive(Debug, Clone)]
pub struct WordCorpus {
    words: Arc<[Word]>,
}

impl WordCorpus {
    /// Build a corpus from words in order.
    ///
    /// Entries are trimmed and lowercased; blank entries and repeats are
    /// dropped, keeping the first occurrence. Capitalization is left to the
    /// builder, so `Paris` and `paris` are the same word.
    ///
    /// # Errors
    ///
    /// Returns [`PassgenError::EmptyCorpus`] if nothing usable remains.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words: Vec<Word> = words
            .into_iter()
            .filter_map(|word| {
                let text = word.as_ref().trim().to_lowercase();
                if text.is_empty() || !seen.insert(text.clone()) {
                    return None;
                }
                let chars = text.chars().count();
                Some(Word { text, chars })
            })
            .collect();

        if words.is_empty() {
            return Err(PassgenError::EmptyCorpus);
        }

        tracing::debug!(words = words.len(), "word corpus built");
        Ok(Self {
            words: words.into(),
        })
    }

    /// Read one word per line.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let lines = BufReader::new(reader)
            .lines()
            .collect::<std::io::Result<Vec<_>>>()?;
        Self::new(lines)
    }

    /// Load a wordlist file, one word per line.
    ///
    /// # Errors
    ///
    /// Returns [`PassgenError::Wordlist`] if the file cannot be read and
    /// [`PassgenError::EmptyCorpus`] if it has no words.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            PassgenError::Wordlist(format!("Failed to open {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "loading wordlist");
        Self::from_reader(file)
    }

    /// The English list bundled with the crate.
    pub fn embedded() -> Self {
        let words: Vec<Word> = EMBEDDED_WORDLIST
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| Word {
                text: line.to_string(),
                chars: line.chars().count(),
            })
            .collect();
        Self {
            words: words.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(|word| word.text.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|word| word.text.as_str())
    }

    /// Length in characters of the word at `index`.
    pub fn char_len(&self, index: usize) -> Option<usize> {
        self.words.get(index).map(|word| word.chars)
    }

    /// Word and its length at `index`. Panics if `index` is out of range.
    pub(crate) fn entry(&self, index: usize) -> (&str, usize) {
        let word = &self.words[index];
        (&word.text, word.chars)
    }

    /// Indices of words with `lower < len < upper`.
    ///
    /// Bounds are signed because callers compute them as distances that can
    /// go negative.
    pub fn words_between(&self, lower: i64, upper: i64) -> Vec<usize> {
        self.words
            .iter()
            .enumerate()
            .filter(|(_, word)| {
                let len = i64::try_from(word.chars).unwrap_or(i64::MAX);
                lower < len && len < upper
            })
            .map(|(index, _)| index)
            .collect()
    }
}
