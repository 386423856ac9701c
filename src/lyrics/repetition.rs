// Repetition marker expansion.
//
// Lyric transcriptions often abbreviate a repeated line as "Hold on (x4)".
// Before counting words we rewrite those lines into literal repeats so the
// text reads the way it is performed.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Trailing "(xN)" marker. Lines are right-trimmed before matching, so
/// trailing Unicode whitespace is allowed; the count itself is ASCII digits only.
static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(x([0-9]+)\)\s*$").expect("valid marker pattern"));

/// Characters that end a line: "\n", "\r" (alone or in "\r\n"), and the
/// rarer vertical tab, form feed, separator, NEL, and Unicode line/paragraph
/// separators.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

/// Expand every trailing "(xN)" marker into N copies of its line.
///
/// Lines are trimmed, and lines that end up empty are dropped. A marker whose
/// count does not fit in a `usize` is left in place as ordinary text.
pub fn expand_repetitions(text: &str) -> String {
    let mut expanded: Vec<&str> = Vec::new();

    // Splitting "\r\n" on both characters leaves an empty line between them,
    // which is dropped with the other blank lines below.
    for line in text.split(LINE_BREAKS) {
        match repeat_count(line) {
            Some((content, count)) => {
                expanded.extend(std::iter::repeat(content).take(count));
            }
            None => expanded.push(line.trim()),
        }
    }

    expanded.retain(|line| !line.is_empty());
    expanded.join("\n")
}

/// Split a line into its marker-stripped content and repeat count.
fn repeat_count(line: &str) -> Option<(&str, usize)> {
    let line = line.trim_end();
    let caps = MARKER.captures(line)?;
    let count = caps[1].parse::<usize>().ok()?;
    let start = caps.get(0)?.start();
    Some((line[..start].trim(), count))
}
