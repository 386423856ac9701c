// Unit tests for lyric text processing.
//
// Tests the repetition expander and the normalizer as pure functions over
// strings, with a small in-memory dictionary standing in for the word list.

use std::collections::HashSet;

use songprint::dictionary::traits::Vocabulary;
use songprint::dictionary::Dictionary;
use songprint::lyrics::normalize::{normalize, MIN_WORD_LEN};
use songprint::lyrics::repetition::expand_repetitions;

fn dictionary() -> Dictionary {
    Dictionary::from_words([
        "wonderful", "hello", "world", "river", "crying", "naive", "dancing", "tonight",
        "heart", "forever",
    ])
}

// ============================================================
// expand_repetitions
// ============================================================

#[test]
fn marker_produces_exactly_n_copies_in_place() {
    for n in 1..=6 {
        let text = format!("before\nsing it loud (x{n})\nafter");
        let expanded = expand_repetitions(&text);
        let lines: Vec<&str> = expanded.lines().collect();

        assert_eq!(lines.len(), n + 2, "n = {n}");
        assert_eq!(lines[0], "before");
        assert!(lines[1..=n].iter().all(|l| *l == "sing it loud"));
        assert_eq!(lines[n + 1], "after");
    }
}

#[test]
fn several_markers_keep_line_order() {
    let expanded = expand_repetitions("a (x2)\nb\nc (x1)");
    assert_eq!(expanded, "a\na\nb\nc");
}

#[test]
fn marker_in_middle_of_line_is_text() {
    let line = "(x2) is how we write repeats";
    assert_eq!(expand_repetitions(line), line);
}

#[test]
fn windows_line_endings() {
    assert_eq!(expand_repetitions("one (x2)\r\ntwo\r\n"), "one\none\ntwo");
}

#[test]
fn classic_mac_line_endings() {
    assert_eq!(expand_repetitions("keep\rgone (x0)"), "keep");
    assert_eq!(
        expand_repetitions("verse\rhook (x3)\rend\r"),
        "verse\nhook\nhook\nhook\nend"
    );
}

#[test]
fn marker_followed_by_no_break_space() {
    assert_eq!(expand_repetitions("sing (x2)\u{a0}\nstop"), "sing\nsing\nstop");
}

// ============================================================
// normalize — properties
// ============================================================

#[test]
fn normalize_is_idempotent() {
    let dict = dictionary();
    let texts = [
        "Hello, World! Wonderful world...",
        "CRYING by the rivér tonight — forever",
        "Naïve heart, dancing 'til tonight",
        "",
    ];

    for text in texts {
        let once = normalize(text, &dict);
        let joined = once.iter().cloned().collect::<Vec<_>>().join(" ");
        let twice = normalize(&joined, &dict);
        assert_eq!(once, twice, "not idempotent for {text:?}");
    }
}

#[test]
fn normalize_never_returns_short_or_unknown_tokens() {
    let dict = dictionary();
    let text = "Oh oh heart, the wonderful world of words: zyzzyva, river and crying";
    let words = normalize(text, &dict);

    assert!(!words.is_empty());
    for word in &words {
        assert!(word.len() >= MIN_WORD_LEN, "{word} is too short");
        assert!(dict.contains(word), "{word} is not in the dictionary");
    }
    assert!(words.contains("heart"));
    assert!(!words.contains("words"));
}

#[test]
fn normalize_folds_accents_and_case() {
    let words = normalize("NAÏVE Crying", &dictionary());
    assert!(words.contains("naive"));
    assert!(words.contains("crying"));
}

#[test]
fn normalize_accepts_plain_word_sets() {
    let vocab: HashSet<String> = ["hello".to_string()].into();
    let words = normalize("HELLO there", &vocab);
    assert_eq!(words.into_iter().collect::<Vec<_>>(), vec!["hello"]);
}

#[test]
fn normalize_empty_text_is_empty() {
    assert!(normalize("", &dictionary()).is_empty());
    assert!(normalize("!!! ... ???", &dictionary()).is_empty());
}
