//! Word-overlap similarity between headings and content snippets.

use std::collections::HashSet;

use crate::config::MIN_TOKEN_LEN;

/// Split text into a set of comparable word tokens.
///
/// Lower-cases, drops every character that is neither alphanumeric nor
/// whitespace, splits on whitespace and discards tokens shorter than
/// [`MIN_TOKEN_LEN`] characters.
#[must_use]
pub fn tokenize(text: &str) -> HashSet<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

/// Overlap of two pre-tokenized sets, weighted toward the smaller one.
///
/// Returns 0 when either set is empty.
#[must_use]
pub fn token_overlap(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let smaller = a.len().min(b.len());
    if smaller == 0 {
        return 0.0;
    }

    let shared = a.intersection(b).count();
    shared as f64 / smaller as f64
}

/// Word overlap score in `[0, 1]`.
///
/// `|A ∩ B| / min(|A|, |B|)` over the token sets of both strings, so a short
/// heading fully contained in a longer one scores 1.0.
///
/// # Examples
/// ```
/// use regelrecht_changeset::text::word_overlap;
///
/// assert_eq!(word_overlap("Definitions", "Definitions and scope"), 1.0);
/// assert_eq!(word_overlap("alpha bravo", "alpha charlie delta"), 0.5);
/// assert_eq!(word_overlap("", "anything"), 0.0);
/// ```
#[must_use]
pub fn word_overlap(a: &str, b: &str) -> f64 {
    token_overlap(&tokenize(a), &tokenize(b))
}

/// The first `max_tokens` whitespace-separated tokens of `text`, space-joined.
#[must_use]
pub fn content_window(text: &str, max_tokens: usize) -> String {
    text.split_whitespace()
        .take(max_tokens)
        .collect::<Vec<_>>()
        .join(" ")
}
