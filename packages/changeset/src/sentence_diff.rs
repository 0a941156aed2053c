//! Sentence-level diff for presenting substitutions.
//!
//! Presentation only: the matcher and classifier never consult it. Texts are
//! split into pseudo-sentences and aligned with a longest-common-subsequence
//! table.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Regex pattern for a sentence boundary: "." or ";" followed by whitespace, or a newline.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.;]\s+|\n").expect("valid regex"));

/// How a sentence relates the old text to the new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Same,
    Added,
    Removed,
}

impl DiffKind {
    /// Single-character marker used in text renderings.
    #[must_use]
    pub fn marker(&self) -> char {
        match self {
            Self::Same => ' ',
            Self::Added => '+',
            Self::Removed => '-',
        }
    }
}

/// One sentence of a sentence-level diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub kind: DiffKind,
    pub text: String,
}

impl DiffLine {
    fn new(kind: DiffKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }
}

/// Split text into trimmed, non-empty pseudo-sentences.
///
/// Boundaries are "." or ";" followed by whitespace (the punctuation stays
/// with the preceding sentence) and newlines.
///
/// # Examples
/// ```
/// use regelrecht_changeset::sentence_diff::split_sentences;
///
/// assert_eq!(
///     split_sentences("First rule. Second rule; third\nfourth"),
///     vec!["First rule.", "Second rule;", "third", "fourth"]
/// );
/// ```
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        let matched = boundary.as_str();
        let end = if matched.starts_with('.') || matched.starts_with(';') {
            boundary.start() + 1
        } else {
            boundary.start()
        };
        sentences.push(&text[start..end]);
        start = boundary.end();
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Diff two texts sentence by sentence.
///
/// Uses a classic O(m·n) LCS table. Where both a removal and an addition are
/// possible at the same point, the removal is emitted first.
#[must_use]
pub fn diff_lines(old_text: &str, new_text: &str) -> Vec<DiffLine> {
    let old = split_sentences(old_text);
    let new = split_sentences(new_text);
    let (m, n) = (old.len(), new.len());

    // lcs[i][j] = length of the LCS of old[i..] and new[j..]
    let mut lcs = vec![vec![0usize; n + 1]; m + 1];
    for i in (0..m).rev() {
        for j in (0..n).rev() {
            lcs[i][j] = if old[i] == new[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut lines = Vec::with_capacity(m.max(n));
    let (mut i, mut j) = (0, 0);
    while i < m && j < n {
        if old[i] == new[j] {
            lines.push(DiffLine::new(DiffKind::Same, old[i]));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            lines.push(DiffLine::new(DiffKind::Removed, old[i]));
            i += 1;
        } else {
            lines.push(DiffLine::new(DiffKind::Added, new[j]));
            j += 1;
        }
    }
    lines.extend(old[i..].iter().map(|s| DiffLine::new(DiffKind::Removed, s)));
    lines.extend(new[j..].iter().map(|s| DiffLine::new(DiffKind::Added, s)));

    lines
}
