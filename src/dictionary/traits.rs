// Vocabulary trait — swap-ready abstraction over the known-word list.
//
// The normalizer only needs a membership test, so anything that can answer
// "is this a real word?" can stand in for the downloaded dictionary.

use std::collections::HashSet;

/// A read-only set of recognized words.
pub trait Vocabulary {
    /// Whether `word` is a recognized word. Lookups are case-insensitive.
    fn contains(&self, word: &str) -> bool;
}

/// Bare word sets are handy in tests. Entries are expected in lowercase.
impl Vocabulary for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word.to_ascii_lowercase().as_str())
    }
}
