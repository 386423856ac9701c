// Text normalization — turns raw lyrics into a set of comparable words.
//
// Pipeline, in order:
//   1. NFKD decomposition, dropping everything outside ASCII (accents go,
//      base letters stay)
//   2. lowercase
//   3. strip ASCII punctuation
//   4. tokenize on runs of 5+ letters between word boundaries
//   5. keep only words the reference dictionary knows
//
// The 5-letter floor and the dictionary filter keep filler ("oh", "yeah"),
// stopwords and transcription noise out of the unique-word comparison.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex_lite::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::dictionary::traits::Vocabulary;

/// Shortest token that counts as a word.
pub const MIN_WORD_LEN: usize = 5;

static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b[a-zA-Z]{{{MIN_WORD_LEN},}}\b")).expect("valid word pattern")
});

/// Normalize `text` into the set of dictionary words it contains.
pub fn normalize(text: &str, vocabulary: &dyn Vocabulary) -> BTreeSet<String> {
    let folded = fold(text);

    WORD.find_iter(&folded)
        .map(|m| m.as_str())
        .filter(|word| vocabulary.contains(word))
        .map(str::to_string)
        .collect()
}

/// Steps 1-3: ASCII fold, lowercase, and strip punctuation.
pub fn fold(text: &str) -> String {
    text.nfkd()
        .filter(char::is_ascii)
        .filter(|c| !c.is_ascii_punctuation())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
