//! Turn a matching result into an ordered list of changes.
//!
//! Ordering policy: substitutions and insertions in new-document order,
//! interleaved by position, followed by repeals in old-document order.
//! Output must stay byte-identical across runs, so this order is fixed.

use crate::text::normalize;
use crate::types::{Article, Change, ChangeStats, Insertion, MatchPair, Repeal, Substitution};

/// Classify matched and unmatched articles into changes.
///
/// - A matched pair whose normalized heading or body differs is a substitution;
///   an unchanged pair produces nothing.
/// - An unmatched new article is an insertion placed after its predecessor
///   in the new list.
/// - An unmatched old article is a repeal.
///
/// Emitted headings and texts are normalized. `pairs` must be a partial
/// bijection over the two lists; out-of-range indices are ignored.
#[must_use]
pub fn classify(old: &[Article], new: &[Article], pairs: &[MatchPair]) -> Vec<Change> {
    let mut new_to_old: Vec<Option<usize>> = vec![None; new.len()];
    let mut old_matched = vec![false; old.len()];

    for pair in pairs {
        if pair.old_index < old.len() && pair.new_index < new.len() {
            new_to_old[pair.new_index] = Some(pair.old_index);
            old_matched[pair.old_index] = true;
        }
    }

    let mut changes = Vec::new();

    for (new_index, new_article) in new.iter().enumerate() {
        match new_to_old[new_index] {
            Some(old_index) => {
                if let Some(substitution) = substitution(&old[old_index], new_article) {
                    changes.push(Change::Substitution(substitution));
                }
            }
            None => {
                let after = new_index
                    .checked_sub(1)
                    .map(|previous| new[previous].id.clone());
                changes.push(Change::Insertion(Insertion {
                    id: new_article.id.clone(),
                    display_number: new_article.display_number.clone(),
                    new_heading: normalize(&new_article.heading),
                    new_text: normalize(&new_article.body),
                    after,
                }));
            }
        }
    }

    for (old_article, _) in old.iter().zip(&old_matched).filter(|(_, matched)| !**matched) {
        changes.push(Change::Repeal(Repeal {
            id: old_article.id.clone(),
            display_number: old_article.display_number.clone(),
            old_heading: normalize(&old_article.heading),
            old_text: normalize(&old_article.body),
        }));
    }

    let stats = ChangeStats::from_changes(&changes);
    tracing::debug!(
        substituted = stats.substituted,
        inserted = stats.inserted,
        repealed = stats.repealed,
        "Classified changes"
    );

    changes
}

/// Substitution for a matched pair, or `None` when nothing changed.
fn substitution(old: &Article, new: &Article) -> Option<Substitution> {
    let old_heading = normalize(&old.heading);
    let new_heading = normalize(&new.heading);
    let old_text = normalize(&old.body);
    let new_text = normalize(&new.body);

    if old_heading == new_heading && old_text == new_text {
        return None;
    }

    Some(Substitution {
        id: new.id.clone(),
        display_number: new.display_number.clone(),
        old_heading,
        old_text,
        new_heading,
        new_text,
    })
}
