//! Main changeset service that ties matching and classification together.

use crate::classify::classify;
use crate::config::MatchConfig;
use crate::matching::MatchEngine;
use crate::types::{Article, ChangeSet};

/// Compute the changeset between two versions of a legal text.
///
/// `base` and `result` name the old and new version; they are copied into
/// the changeset unchanged. Article ids must be unique within each list.
///
/// # Examples
/// ```
/// use regelrecht_changeset::{diff_articles, Article};
///
/// let old = vec![Article::new("a1", "Article 1", "Purpose", "This Act regulates X.")];
/// let new = vec![Article::new("a1", "Article 1", "Purpose", "This Act regulates X and Y.")];
///
/// let changeset = diff_articles("v1", "v2", &old, &new);
/// assert_eq!(changeset.stats.substituted, 1);
/// ```
#[must_use]
pub fn diff_articles(
    base: impl Into<String>,
    result: impl Into<String>,
    old: &[Article],
    new: &[Article],
) -> ChangeSet {
    diff_articles_with(base, result, old, new, &MatchConfig::default())
}

/// Compute a changeset with an explicit matching configuration.
#[must_use]
pub fn diff_articles_with(
    base: impl Into<String>,
    result: impl Into<String>,
    old: &[Article],
    new: &[Article],
    config: &MatchConfig,
) -> ChangeSet {
    let engine = MatchEngine::new(*config);
    let pairs = engine.match_articles(old, new);
    let changes = classify(old, new, &pairs);
    ChangeSet::new(base, result, changes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Change, ChangeStats, Substitution};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_purpose_amendment() {
        let old = vec![Article::new("a1", "", "Purpose", "This Act regulates X.")];
        let new = vec![Article::new("a1", "", "Purpose", "This Act regulates X and Y.")];

        let changeset = diff_articles("base", "result", &old, &new);
        assert_eq!(
            changeset,
            ChangeSet {
                base: "base".to_string(),
                result: "result".to_string(),
                changes: vec![Change::Substitution(Substitution {
                    id: "a1".to_string(),
                    display_number: String::new(),
                    old_heading: "Purpose".to_string(),
                    old_text: "This Act regulates X.".to_string(),
                    new_heading: "Purpose".to_string(),
                    new_text: "This Act regulates X and Y.".to_string(),
                })],
                stats: ChangeStats {
                    substituted: 1,
                    inserted: 0,
                    repealed: 0
                },
            }
        );
    }

    #[test]
    fn test_renumbered_article_is_no_change() {
        let old = vec![Article::new("art_1", "Article 1", "Definitions", "B")];
        let new = vec![Article::new("art_2", "Article 2", "Definitions", "B")];
        assert!(diff_articles("v1", "v2", &old, &new).is_empty());
    }

    #[test]
    fn test_config_is_respected() {
        let old = vec![Article::new("a", "", "", "one two three four five")];
        let new = vec![Article::new("b", "", "", "one two six seven eight")];

        let default = diff_articles("v1", "v2", &old, &new);
        assert_eq!(default.stats.substituted, 1);

        let strict = diff_articles_with(
            "v1",
            "v2",
            &old,
            &new,
            &MatchConfig::default().with_content_threshold(0.5),
        );
        assert_eq!(strict.stats.inserted, 1);
        assert_eq!(strict.stats.repealed, 1);
    }
}
