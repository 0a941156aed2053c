//! Text normalization for article comparison.

use regex::Regex;
use std::sync::LazyLock;

/// Regex pattern for a word broken by a hyphen at a line end ("word-\nword").
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HYPHENATED_LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w)-[ \t]*\r?\n\s*").expect("valid regex"));

/// Regex pattern for any whitespace run, newlines included.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Regex pattern for a leading article number in a heading.
///
/// Matches "Article 5", "Art. 5a", "Artikel 12", "Artículo 23 bis" and
/// similar, plus trailing separator punctuation.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_NUMBER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:article|artikel|art[íi]culo|art\.?)\s*\d+[a-z]*(?:\s+(?:bis|ter|quater|quinquies|sexies|septies|octies|nonies|decies))?\b\s*[.:\-–—]?\s*",
    )
    .expect("valid regex")
});

/// Regex pattern for a leading spelled-out ordinal followed by "." or ":".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ORDINAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth|primero|segundo|tercero|cuarto|quinto|sexto|s[ée]ptimo|octavo|noveno|d[ée]cimo|eerste|tweede|derde|vierde|vijfde)\s*[.:]\s*",
    )
    .expect("valid regex")
});

/// Normalize text so layout differences do not count as changes.
///
/// - Rejoins words split by a hyphen across a line break ("word-\nword" → "word-word")
/// - Collapses every whitespace run, newlines included, to a single space
/// - Trims leading and trailing whitespace
///
/// Encoding and other characters are passed through untouched.
///
/// # Examples
/// ```
/// use regelrecht_changeset::text::normalize;
///
/// assert_eq!(normalize("  The  Minister-\n  of Finance\n"), "The Minister-of Finance");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let joined = HYPHENATED_LINE_BREAK.replace_all(raw, "${1}-");
    WHITESPACE_RUN.replace_all(&joined, " ").trim().to_string()
}

/// Normalize a heading for matching.
///
/// Applies [`normalize`], strips a leading article number or ordinal so that
/// renumbering does not affect the comparison, and lower-cases the result.
///
/// # Examples
/// ```
/// use regelrecht_changeset::text::normalize_heading;
///
/// assert_eq!(normalize_heading("Article 4. Definitions"), "definitions");
/// assert_eq!(normalize_heading("Definitions"), "definitions");
/// ```
#[must_use]
pub fn normalize_heading(heading: &str) -> String {
    let normalized = normalize(heading);
    let stripped = ARTICLE_NUMBER_PREFIX.replace(&normalized, "");
    let stripped = ORDINAL_PREFIX.replace(&stripped, "");
    stripped.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("a  b\t\tc\n\nd"), "a b c d");
        assert_eq!(normalize("\n  leading and trailing  \n"), "leading and trailing");
    }

    #[test]
    fn test_normalize_rejoins_hyphenated_line_break() {
        assert_eq!(normalize("word-\nword"), "word-word");
        assert_eq!(normalize("zorg-\r\n   toeslag"), "zorg-toeslag");
        assert_eq!(normalize("socio- \neconomic"), "socio-economic");
    }

    #[test]
    fn test_normalize_keeps_list_dashes() {
        // A dash at the start of a line is not a broken word
        assert_eq!(normalize("items:\n- first\n- second"), "items: - first - second");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn test_normalize_layout_invariance() {
        let wrapped = "This Act regulates the\nallowance for health-\ncare costs.";
        let flat = "This Act regulates the allowance for health-care costs.";
        assert_eq!(normalize(wrapped), normalize(flat));
    }

    #[test]
    fn test_normalize_passes_other_characters_through() {
        assert_eq!(normalize("€ 1,50 — §\u{7}"), "€ 1,50 — §\u{7}");
    }

    #[test]
    fn test_normalize_heading_strips_article_prefix() {
        assert_eq!(normalize_heading("Article 1 Definitions"), "definitions");
        assert_eq!(normalize_heading("Art. 5a: Scope"), "scope");
        assert_eq!(normalize_heading("Artikel 12 - Citeertitel"), "citeertitel");
        assert_eq!(normalize_heading("Artículo 23 bis. Objeto"), "objeto");
    }

    #[test]
    fn test_normalize_heading_strips_ordinal_prefix() {
        assert_eq!(normalize_heading("Primero. Objeto de la ley"), "objeto de la ley");
        assert_eq!(normalize_heading("First: General provisions"), "general provisions");
    }

    #[test]
    fn test_normalize_heading_keeps_ordinary_words() {
        assert_eq!(normalize_heading("Articles of association"), "articles of association");
        assert_eq!(normalize_heading("First-time buyers"), "first-time buyers");
        assert_eq!(normalize_heading("Particular cases"), "particular cases");
    }

    #[test]
    fn test_normalize_heading_empty() {
        assert_eq!(normalize_heading(""), "");
        assert_eq!(normalize_heading("Article 3"), "");
    }
}
