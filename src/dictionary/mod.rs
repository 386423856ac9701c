// Reference dictionary — the known-word list used to filter lyric tokens.
//
// The list is loaded once at startup into an immutable `Dictionary` and handed
// to the normalizer by reference. See `download` for where it comes from.

pub mod download;
pub mod traits;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use traits::Vocabulary;

/// Immutable set of lowercase dictionary words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from any collection of words. Words are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parse a plain word list: one word per line, blank lines ignored.
    pub fn parse(contents: &str) -> Self {
        Self::from_words(contents.lines())
    }

    /// Load a word list from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dictionary: {}", path.display()))?;
        let dictionary = Self::parse(&contents);

        if dictionary.is_empty() {
            anyhow::bail!("Dictionary at {} contains no words", path.display());
        }

        info!(
            words = dictionary.len(),
            path = %path.display(),
            "Loaded reference dictionary"
        );
        Ok(dictionary)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Vocabulary for Dictionary {
    fn contains(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.words.contains(&word.to_ascii_lowercase())
        } else {
            self.words.contains(word)
        }
    }
}
