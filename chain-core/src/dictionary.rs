use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::dueum;

/// Word list failures are fatal at startup; nothing here occurs mid-game.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read word list {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("word list {path} contains no usable words")]
    Empty { path: String },
}

/// Immutable set of valid game words, loaded once at startup and shared
/// read-only across every room's session.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Dictionary {
    /// Load a newline-delimited UTF-8 word list from disk. Lines are
    /// trimmed; entries that are not 2-10 Hangul syllables are skipped.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| DictionaryError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        let dict = Self::from_lines(&raw);
        if dict.is_empty() {
            return Err(DictionaryError::Empty {
                path: path.display().to_string(),
            });
        }
        info!(words = dict.len(), path = %path.display(), "loaded word list");
        Ok(dict)
    }

    /// Build a dictionary from in-memory text, one word per line.
    pub fn from_lines(text: &str) -> Self {
        let mut words = Vec::new();
        let mut index = HashSet::new();
        for line in text.lines() {
            let word = line.trim();
            if !dueum::is_playable_word(word) {
                continue;
            }
            if index.insert(word.to_string()) {
                words.push(word.to_string());
            }
        }
        Self { words, index }
    }

    /// Exact membership.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// All words in load order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Words whose first syllable is `first`, in load order.
    pub fn words_starting_with(&self, first: char) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .filter(move |w| w.starts_with(first))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
