//! Changesets for article lists whose identifiers are stable across versions.
//!
//! Some sources number articles reliably (BWB article numbers, for one). For
//! those, pairing by identifier is exact and cheaper than the matching
//! cascade. Classification and ordering are shared with the full engine, so
//! both produce the same `ChangeSet` shape.

use std::collections::HashMap;

use crate::classify::classify;
use crate::types::{Article, ChangeSet, MatchPair, MatchStrategy};

/// Pair articles with equal, non-empty identifiers.
///
/// If an identifier occurs more than once on a side (a broken precondition),
/// only its first occurrence is paired.
#[must_use]
pub fn match_by_id(old: &[Article], new: &[Article]) -> Vec<MatchPair> {
    let mut new_by_id: HashMap<&str, usize> = HashMap::with_capacity(new.len());
    for (index, article) in new.iter().enumerate() {
        if !article.id.is_empty() {
            new_by_id.entry(article.id.as_str()).or_insert(index);
        }
    }

    let mut pairs = Vec::new();
    for (old_index, article) in old.iter().enumerate() {
        if let Some(new_index) = new_by_id.remove(article.id.as_str()) {
            pairs.push(MatchPair::new(
                old_index,
                new_index,
                MatchStrategy::Identifier,
                1.0,
            ));
        }
    }

    pairs
}

/// Build a changeset by pairing articles on their identifiers only.
#[must_use]
pub fn diff_by_id(
    base: impl Into<String>,
    result: impl Into<String>,
    old: &[Article],
    new: &[Article],
) -> ChangeSet {
    let pairs = match_by_id(old, new);
    tracing::debug!(pairs = pairs.len(), "Matched articles by id");
    ChangeSet::new(base, result, classify(old, new, &pairs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Change, ChangeKind, ChangeStats};

    fn article(id: &str, body: &str) -> Article {
        Article::new(id, id, "", body)
    }

    #[test]
    fn test_match_by_id() {
        let old = vec![article("1", "a"), article("2", "b"), article("3", "c")];
        let new = vec![article("3", "c"), article("1", "a")];

        let pairs: Vec<_> = match_by_id(&old, &new)
            .iter()
            .map(|p| (p.old_index, p.new_index))
            .collect();
        assert_eq!(pairs, vec![(0, 1), (2, 0)]);
    }

    #[test]
    fn test_match_by_id_skips_empty_ids() {
        let old = vec![article("", "a")];
        let new = vec![article("", "a")];
        assert!(match_by_id(&old, &new).is_empty());
    }

    #[test]
    fn test_match_by_id_duplicate_pairs_once() {
        let old = vec![article("1", "a"), article("1", "b")];
        let new = vec![article("1", "a")];
        assert_eq!(match_by_id(&old, &new).len(), 1);
    }

    #[test]
    fn test_diff_by_id() {
        let old = vec![article("1", "Same."), article("2", "Old."), article("3", "Gone.")];
        let new = vec![article("1", "Same."), article("2", "New."), article("2a", "Added.")];

        let changeset = diff_by_id("2024-01-01", "2025-01-01", &old, &new);
        assert_eq!(changeset.base, "2024-01-01");
        assert_eq!(changeset.result, "2025-01-01");
        assert_eq!(
            changeset.stats,
            ChangeStats {
                substituted: 1,
                inserted: 1,
                repealed: 1
            }
        );

        let kinds: Vec<_> = changeset.changes.iter().map(|c| (c.kind(), c.id())).collect();
        assert_eq!(
            kinds,
            vec![
                (ChangeKind::Substitution, "2"),
                (ChangeKind::Insertion, "2a"),
                (ChangeKind::Repeal, "3"),
            ]
        );
        let Change::Insertion(insertion) = &changeset.changes[1] else {
            unreachable!("second change is an insertion");
        };
        assert_eq!(insertion.after.as_deref(), Some("2"));
    }

    #[test]
    fn test_diff_by_id_renumbering_is_not_detected() {
        // Without the cascade a renumbered article shows up as repeal + insertion
        let old = vec![article("art_1", "Body.")];
        let new = vec![article("art_2", "Body.")];
        let changeset = diff_by_id("a", "b", &old, &new);
        assert_eq!(changeset.stats.inserted, 1);
        assert_eq!(changeset.stats.repealed, 1);
    }
}
