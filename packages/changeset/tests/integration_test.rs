//! End-to-end tests for the changeset engine.
//!
//! Covers the behavioural guarantees of `diff_articles` plus a full run on
//! two harvested versions of the Wet op de zorgtoeslag (BWBR0018451).

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use regelrecht_changeset::emit::{generate_json, generate_yaml, parse_json, parse_yaml, render_text};
use regelrecht_changeset::source::load_document;
use regelrecht_changeset::{
    diff_articles, diff_by_id, Article, Change, ChangeSet, ChangeStats, Insertion, Repeal,
    Substitution,
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Space-joined tokens `{prefix}000 .. {prefix}{count-1}`, all long enough to score.
fn words(prefix: &str, range: std::ops::Range<usize>) -> Vec<String> {
    range.map(|i| format!("{prefix}{i:03}")).collect()
}

/// A 100-token text sharing exactly `shared` tokens with `words("tok", 0..100)`.
fn overlapping_text(shared: usize) -> String {
    let mut tokens = words("tok", 0..shared);
    tokens.extend(words("alt", shared..100));
    tokens.join(" ")
}

fn sample_articles() -> Vec<Article> {
    vec![
        Article::new("a1", "Article 1", "Purpose", "This Act regulates X."),
        Article::new("a2", "Article 2", "Definitions", "In this Act, minister means the Minister of Finance."),
        Article::new("a3", "Article 3", "Fees", "Applicants pay a fee. The fee is set yearly."),
        Article::new("a4", "Article 4", "Entry into force", "This Act enters into force on a date set by decree."),
    ]
}

// =============================================================================
// Behavioural guarantees
// =============================================================================

#[test]
fn test_identity_yields_empty_changeset() {
    let articles = sample_articles();
    let changeset = diff_articles("v1", "v1", &articles, &articles);

    assert!(changeset.changes.is_empty());
    assert_eq!(changeset.stats, ChangeStats::default());
}

#[test]
fn test_identity_without_headings_or_bodies() {
    let articles = vec![
        Article::new("a1", "", "", ""),
        Article::new("a2", "", "", "..."),
        Article::new("a3", "", "Scope", ""),
    ];
    assert!(diff_articles("v1", "v1", &articles, &articles).is_empty());
}

#[test]
fn test_empty_bodies_with_different_headings_do_not_match() {
    let old = vec![Article::new("o1", "", "Penalties", "")];
    let new = vec![Article::new("n1", "", "Citation title", "")];

    let changeset = diff_articles("v1", "v2", &old, &new);
    assert_eq!(changeset.stats, ChangeStats { substituted: 0, inserted: 1, repealed: 1 });

    let old = vec![Article::new("o1", "", "Penalties", "—")];
    let new = vec![Article::new("n1", "", "Citation title", "—")];

    let changeset = diff_articles("v1", "v2", &old, &new);
    assert_eq!(changeset.stats, ChangeStats { substituted: 0, inserted: 1, repealed: 1 });
}

#[test]
fn test_pure_insertion() {
    let old = sample_articles();
    let mut new = old.clone();
    new.push(Article::new("a5", "Article 5", "Evaluation", "The Minister reports every five years."));

    let changeset = diff_articles("v1", "v2", &old, &new);

    assert_eq!(
        changeset.changes,
        vec![Change::Insertion(Insertion {
            id: "a5".to_string(),
            display_number: "Article 5".to_string(),
            new_heading: "Evaluation".to_string(),
            new_text: "The Minister reports every five years.".to_string(),
            after: Some("a4".to_string()),
        })]
    );
}

#[test]
fn test_insertion_at_start_has_no_predecessor() {
    let old = sample_articles();
    let mut new = vec![Article::new("a0", "Article 0", "Preamble", "Whereas reform is needed.")];
    new.extend(old.iter().cloned());

    let changeset = diff_articles("v1", "v2", &old, &new);

    assert_eq!(changeset.stats.inserted, 1);
    let Change::Insertion(insertion) = &changeset.changes[0] else {
        panic!("expected an insertion, got {:?}", changeset.changes[0]);
    };
    assert_eq!(insertion.after, None);
}

#[test]
fn test_pure_repeal() {
    let old = sample_articles();
    let new: Vec<Article> = old.iter().filter(|a| a.id != "a3").cloned().collect();

    let changeset = diff_articles("v1", "v2", &old, &new);

    assert_eq!(
        changeset.changes,
        vec![Change::Repeal(Repeal {
            id: "a3".to_string(),
            display_number: "Article 3".to_string(),
            old_heading: "Fees".to_string(),
            old_text: "Applicants pay a fee. The fee is set yearly.".to_string(),
        })]
    );
    assert_eq!(changeset.stats.substituted, 0);
}

#[test]
fn test_renumbering_is_no_change() {
    let old = vec![Article::new("art_1", "", "Definitions", "B")];
    let new = vec![Article::new("art_2", "", "Definitions", "B")];

    let changeset = diff_articles("v1", "v2", &old, &new);
    assert!(changeset.is_empty(), "renumbering produced {:?}", changeset.changes);
}

#[test]
fn test_number_in_heading_does_not_prevent_match() {
    let old = vec![Article::new("art_5", "", "Article 5. Fees", "Applicants pay a fee.")];
    let new = vec![Article::new("art_6", "", "Article 6. Fees", "Applicants pay a fee.")];

    let changeset = diff_articles("v1", "v2", &old, &new);

    // Matched on the heading without its number, so the retitle is a substitution
    assert_eq!(changeset.stats, ChangeStats { substituted: 1, inserted: 0, repealed: 0 });
    let Change::Substitution(substitution) = &changeset.changes[0] else {
        panic!("expected a substitution, got {:?}", changeset.changes[0]);
    };
    assert_eq!(substitution.id, "art_6");
    assert_eq!(substitution.old_heading, "Article 5. Fees");
}

#[test]
fn test_layout_only_changes_are_ignored() {
    let old = vec![Article::new("a1", "", "Purpose", "This Act regu-\nlates   X.\n")];
    let new = vec![Article::new("a1", "", "Purpose", "This Act regu-lates X.")];

    assert!(diff_articles("v1", "v2", &old, &new).is_empty());
}

#[test]
fn test_heading_threshold_boundary_matches_at_half() {
    let old = vec![Article::new("o1", "", overlapping_text(100), "Old provision wording")];
    let new = vec![Article::new("n1", "", overlapping_text(50), "Fresh rule text")];

    let changeset = diff_articles("v1", "v2", &old, &new);

    assert_eq!(changeset.stats, ChangeStats { substituted: 1, inserted: 0, repealed: 0 });
    assert_eq!(changeset.changes[0].id(), "n1");
}

#[test]
fn test_heading_threshold_boundary_rejects_below_half() {
    let old = vec![Article::new("o1", "", overlapping_text(100), "Old provision wording")];
    let new = vec![Article::new("n1", "", overlapping_text(49), "Fresh rule text")];

    let changeset = diff_articles("v1", "v2", &old, &new);

    assert_eq!(changeset.stats, ChangeStats { substituted: 0, inserted: 1, repealed: 1 });
}

#[test]
fn test_content_threshold_boundary_matches_at_forty_percent() {
    let old = vec![Article::new("o1", "", "", overlapping_text(100))];
    let new = vec![Article::new("n1", "", "", overlapping_text(40))];

    let changeset = diff_articles("v1", "v2", &old, &new);

    assert_eq!(changeset.stats, ChangeStats { substituted: 1, inserted: 0, repealed: 0 });
}

#[test]
fn test_content_threshold_boundary_rejects_below_forty_percent() {
    let old = vec![Article::new("o1", "", "", overlapping_text(100))];
    let new = vec![Article::new("n1", "", "", overlapping_text(39))];

    let changeset = diff_articles("v1", "v2", &old, &new);

    assert_eq!(changeset.stats, ChangeStats { substituted: 0, inserted: 1, repealed: 1 });
}

#[test]
fn test_content_beyond_window_is_not_compared() {
    // Identical tails past the first 200 tokens do not rescue a match
    let tail = words("tail", 0..300).join(" ");
    let old = vec![Article::new("o1", "", "", format!("{} {tail}", words("old", 0..200).join(" ")))];
    let new = vec![Article::new("n1", "", "", format!("{} {tail}", words("new", 0..200).join(" ")))];

    let changeset = diff_articles("v1", "v2", &old, &new);

    assert_eq!(changeset.stats, ChangeStats { substituted: 0, inserted: 1, repealed: 1 });
}

#[test]
fn test_ordering_is_deterministic() {
    let old = sample_articles();
    let new = vec![
        Article::new("b1", "Article 1", "Purpose and scope", "This Act regulates X and Y."),
        Article::new("b2", "Article 2", "Supervision", "The Authority supervises compliance."),
        Article::new("b3", "Article 3", "Fees", "Applicants pay a fee. The fee is indexed yearly."),
    ];

    let first = generate_json(&diff_articles("v1", "v2", &old, &new)).unwrap();
    let second = generate_json(&diff_articles("v1", "v2", &old, &new)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_change_order_new_document_then_repeals() {
    let old = sample_articles();
    let new = vec![
        Article::new("b1", "Article 1", "Purpose", "This Act regulates X and Y."),
        Article::new("b2", "Article 2", "Supervision", "The Authority supervises compliance."),
        Article::new("b3", "Article 3", "Fees", "Applicants pay a fee. The fee is indexed yearly."),
    ];

    let changeset = diff_articles("v1", "v2", &old, &new);

    let summary: Vec<(&str, &str)> = changeset
        .changes
        .iter()
        .map(|c| (c.kind().as_str(), c.id()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("substitution", "b1"),
            ("insertion", "b2"),
            ("substitution", "b3"),
            ("repeal", "a2"),
            ("repeal", "a4"),
        ]
    );
    assert_eq!(changeset.stats, ChangeStats { substituted: 2, inserted: 1, repealed: 2 });
}

#[test]
fn test_purpose_amendment_end_to_end() {
    let old = vec![Article::new("a1", "", "Purpose", "This Act regulates X.")];
    let new = vec![Article::new("a1", "", "Purpose", "This Act regulates X and Y.")];

    let changeset = diff_articles("base", "result", &old, &new);

    assert_eq!(
        changeset.changes,
        vec![Change::Substitution(Substitution {
            id: "a1".to_string(),
            display_number: String::new(),
            old_heading: "Purpose".to_string(),
            old_text: "This Act regulates X.".to_string(),
            new_heading: "Purpose".to_string(),
            new_text: "This Act regulates X and Y.".to_string(),
        })]
    );
    assert_eq!(changeset.stats, ChangeStats { substituted: 1, inserted: 0, repealed: 0 });
}

#[test]
fn test_empty_inputs() {
    let articles = sample_articles();

    assert!(diff_articles("v1", "v2", &[], &[]).is_empty());

    let all_new = diff_articles("v1", "v2", &[], &articles);
    assert_eq!(all_new.stats, ChangeStats { substituted: 0, inserted: 4, repealed: 0 });

    let all_gone = diff_articles("v1", "v2", &articles, &[]);
    assert_eq!(all_gone.stats, ChangeStats { substituted: 0, inserted: 0, repealed: 4 });
    let ids: Vec<&str> = all_gone.changes.iter().map(Change::id).collect();
    assert_eq!(ids, vec!["a1", "a2", "a3", "a4"]);
}

#[test]
fn test_stats_agree_with_changes() {
    let old = sample_articles();
    let new = vec![sample_articles()[0].clone(), Article::new("x", "", "Other", "Other text here.")];

    let changeset = diff_articles("v1", "v2", &old, &new);
    assert_eq!(changeset.stats, ChangeStats::from_changes(&changeset.changes));
    assert_eq!(changeset.stats.total(), changeset.changes.len());
}

// =============================================================================
// Harvested law versions
// =============================================================================

fn zorgtoeslag_changeset() -> ChangeSet {
    let old = load_document(&fixture("zorgtoeslag/2024-01-01.yaml"), "old").unwrap();
    let new = load_document(&fixture("zorgtoeslag/2025-01-01.yaml"), "new").unwrap();

    assert_eq!(old.id.as_deref(), Some("zorgtoeslag_2024"));
    assert_eq!(new.id.as_deref(), Some("zorgtoeslag_2025"));

    diff_articles("2024-01-01", "2025-01-01", &old.articles, &new.articles)
}

#[test]
fn test_zorgtoeslag_changeset() {
    let changeset = zorgtoeslag_changeset();

    assert_eq!(changeset.base, "2024-01-01");
    assert_eq!(changeset.result, "2025-01-01");
    assert_eq!(changeset.stats, ChangeStats { substituted: 1, inserted: 1, repealed: 1 });

    let Change::Substitution(substitution) = &changeset.changes[0] else {
        panic!("expected a substitution first, got {:?}", changeset.changes[0]);
    };
    assert_eq!(substitution.id, "2");
    assert!(!substitution.old_text.contains('\n'));
    assert!(substitution.new_text.ends_with("De zorgtoeslag wordt maandelijks uitbetaald."));

    assert_eq!(
        changeset.changes[1],
        Change::Insertion(Insertion {
            id: "2a".to_string(),
            display_number: "2a".to_string(),
            new_heading: "Hoogte van de zorgtoeslag".to_string(),
            new_text: "Het standaardpremiebedrag bedraagt € 2.112 per jaar.".to_string(),
            after: Some("2".to_string()),
        })
    );
    assert_eq!(changeset.changes[2].id(), "3");
}

#[test]
fn test_zorgtoeslag_keyed_changeset_agrees() {
    let old = load_document(&fixture("zorgtoeslag/2024-01-01.yaml"), "old").unwrap();
    let new = load_document(&fixture("zorgtoeslag/2025-01-01.yaml"), "new").unwrap();

    let keyed = diff_by_id("2024-01-01", "2025-01-01", &old.articles, &new.articles);
    assert_eq!(keyed, zorgtoeslag_changeset());
}

#[test]
fn test_zorgtoeslag_outputs() {
    let changeset = zorgtoeslag_changeset();

    let json = generate_json(&changeset).unwrap();
    assert!(json.contains("\"type\": \"substitution\""));
    assert!(json.contains("\"after\": \"2\""));
    assert_eq!(parse_json(&json).unwrap(), changeset);

    let yaml = generate_yaml(&changeset).unwrap();
    assert!(yaml.starts_with("---\n"));
    assert!(yaml.contains("type: repeal"));
    assert_eq!(parse_yaml(&yaml).unwrap(), changeset);

    let text = render_text(&changeset);
    assert!(text.contains("~ substitution 2: Zorgtoeslag"));
    assert!(text.contains("  + De zorgtoeslag wordt maandelijks uitbetaald."));
    assert!(text.contains("+ insertion 2a after 2: Hoogte van de zorgtoeslag"));
    assert!(text.contains("- repeal 3: Overgangsbepaling"));
    assert!(text.ends_with("1 substituted, 1 inserted, 1 repealed\n"));
}

#[test]
fn test_duplicate_ids_rejected_on_load() {
    let err = load_document(&fixture("duplicate_ids.json"), "old").unwrap_err();
    assert!(err.to_string().contains("Duplicate article id 'a1' in old version"));
}
