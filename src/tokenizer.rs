//! Line and word segmentation for Bengali text.

use std::sync::LazyLock;

use regex::Regex;

use crate::engine::TextUnit;

/// A run of word characters or Bengali script, or one character that is
/// neither a word character nor whitespace.
#[allow(clippy::expect_used)]
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\w\x{0980}-\x{09FF}]+|[^\w\s]").expect("token regex")
});

const BENGALI_BLOCK: std::ops::RangeInclusive<char> = '\u{0980}'..='\u{09FF}';

/// Splits raw input into trimmed, non-empty lines in source order.
pub fn segment_lines(text: &str) -> Vec<TextUnit> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(TextUnit::from)
        .collect()
}

/// Splits a line into word and punctuation tokens.
///
/// Word characters follow Unicode `\w`, so combining marks and the
/// zero-width joiners stay inside their word. Whitespace only separates.
pub fn segment_words(line: &str) -> Vec<TextUnit> {
    TOKEN_RE
        .find_iter(line)
        .map(|token| TextUnit::from(token.as_str()))
        .collect()
}

/// Whether `text` has at least one character from the Bengali block.
pub fn contains_bengali(text: &str) -> bool {
    text.chars().any(|ch| BENGALI_BLOCK.contains(&ch))
}
