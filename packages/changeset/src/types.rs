//! Core data types for the changeset engine.
//!
//! These types describe one version of a legal text as an ordered list of
//! articles, and the article-level differences between two such versions.

use serde::{Deserialize, Serialize};

/// A single article of one version of a legal text.
///
/// Produced by an external parser. `id` is unique within one version's list
/// but is not trusted as a join key across versions. `number` and `text`
/// are accepted as aliases so harvested law YAML loads as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Identifier, stable within one version's list.
    #[serde(default)]
    pub id: String,

    /// Human-facing label (e.g. "Article 1", "Artículo 23 bis").
    #[serde(default, alias = "number")]
    pub display_number: String,

    /// Short title; may be empty.
    #[serde(default)]
    pub heading: String,

    /// Full text, excluding number and heading.
    #[serde(default, alias = "text")]
    pub body: String,
}

impl Article {
    /// Create a new article.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        display_number: impl Into<String>,
        heading: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_number: display_number.into(),
            heading: heading.into(),
            body: body.into(),
        }
    }
}

/// Which pass of the matching cascade produced a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Normalized headings are equal.
    ExactHeading,
    /// Headings contain one another or share enough words.
    PartialHeading,
    /// Leading body text shares enough words.
    Content,
    /// Identifiers are equal (keyed changesets only).
    Identifier,
}

impl MatchStrategy {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExactHeading => "exact_heading",
            Self::PartialHeading => "partial_heading",
            Self::Content => "content",
            Self::Identifier => "identifier",
        }
    }
}

/// A pairing of an old-version article with a new-version article.
///
/// Within one matching result every old index and every new index appears
/// in at most one pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchPair {
    pub old_index: usize,
    pub new_index: usize,
    pub strategy: MatchStrategy,
    /// Similarity that justified the pair (1.0 for exact matches).
    pub score: f64,
}

impl MatchPair {
    #[must_use]
    pub fn new(old_index: usize, new_index: usize, strategy: MatchStrategy, score: f64) -> Self {
        Self {
            old_index,
            new_index,
            strategy,
            score,
        }
    }
}

/// An article present in both versions whose heading or body changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Substitution {
    pub id: String,
    /// Display number of the article, omitted when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_number: String,
    pub old_heading: String,
    pub old_text: String,
    pub new_heading: String,
    pub new_text: String,
}

/// An article only present in the new version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insertion {
    pub id: String,
    /// Display number of the article, omitted when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_number: String,
    pub new_heading: String,
    pub new_text: String,
    /// Id of the preceding article in the new ordering; `None` when first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

/// An article only present in the old version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repeal {
    pub id: String,
    /// Display number of the article, omitted when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_number: String,
    pub old_heading: String,
    pub old_text: String,
}

/// Kind of article-level change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Substitution,
    Insertion,
    Repeal,
}

impl ChangeKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Substitution => "substitution",
            Self::Insertion => "insertion",
            Self::Repeal => "repeal",
        }
    }
}

/// A single article-level change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Change {
    Substitution(Substitution),
    Insertion(Insertion),
    Repeal(Repeal),
}

impl Change {
    /// Identifier of the article this change applies to.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Substitution(s) => &s.id,
            Self::Insertion(i) => &i.id,
            Self::Repeal(r) => &r.id,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ChangeKind {
        match self {
            Self::Substitution(_) => ChangeKind::Substitution,
            Self::Insertion(_) => ChangeKind::Insertion,
            Self::Repeal(_) => ChangeKind::Repeal,
        }
    }
}

/// Counts of each kind of change in a changeset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeStats {
    pub substituted: usize,
    pub inserted: usize,
    pub repealed: usize,
}

impl ChangeStats {
    /// Count the changes in a list.
    #[must_use]
    pub fn from_changes(changes: &[Change]) -> Self {
        let mut stats = Self::default();
        for change in changes {
            match change.kind() {
                ChangeKind::Substitution => stats.substituted += 1,
                ChangeKind::Insertion => stats.inserted += 1,
                ChangeKind::Repeal => stats.repealed += 1,
            }
        }
        stats
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.substituted + self.inserted + self.repealed
    }
}

/// All differences between two versions, with summary counts.
///
/// `base` and `result` name the compared versions opaquely and are passed
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    pub base: String,
    pub result: String,
    pub changes: Vec<Change>,
    pub stats: ChangeStats,
}

impl ChangeSet {
    /// Create a changeset, deriving the stats from the changes.
    #[must_use]
    pub fn new(base: impl Into<String>, result: impl Into<String>, changes: Vec<Change>) -> Self {
        let stats = ChangeStats::from_changes(&changes);
        Self {
            base: base.into(),
            result: result.into(),
            changes,
            stats,
        }
    }

    /// True when the two versions have no article-level differences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
