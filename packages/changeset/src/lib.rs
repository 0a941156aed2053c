//! RegelRecht Changeset - Article-level differences between versions of a law.
//!
//! Given two versions of a legal text, each an ordered list of articles,
//! this crate determines which articles were substituted, inserted or
//! repealed, even when numbering is inconsistent, renumbered or absent, and
//! emits a normalized changeset plus a human-readable diff.
//!
//! # Example
//!
//! ```
//! use regelrecht_changeset::{diff_articles, Article};
//!
//! let old = vec![Article::new("art_1", "Article 1", "Definitions", "In this Act...")];
//! let new = vec![Article::new("art_2", "Article 2", "Definitions", "In this Act...")];
//!
//! // Renumbered but otherwise identical: no change
//! assert!(diff_articles("v1", "v2", &old, &new).is_empty());
//! ```
//!
//! # Architecture
//!
//! - [`types`]: Article, MatchPair, Change and ChangeSet
//! - [`text`]: Text normalization and word-overlap similarity
//! - [`matching`]: Three-pass matching cascade
//! - [`classify`]: Turning matches into ordered changes
//! - [`sentence_diff`]: LCS sentence diff for presentation
//! - [`keyed`]: Changesets for sources with stable ids
//! - [`emit`]: JSON, YAML and text output
//! - [`source`]: Loading article lists from files
//! - [`config`]: Thresholds and matching configuration
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface
//! - [`engine`]: Main diff entry points
//!
//! The engine is synchronous and keeps no state between calls, so many
//! document pairs can be diffed concurrently without coordination.

pub mod classify;
pub mod cli;
pub mod config;
pub mod emit;
pub mod engine;
pub mod error;
pub mod keyed;
pub mod matching;
pub mod sentence_diff;
pub mod source;
pub mod text;
pub mod types;

// Re-export main functions
pub use engine::{diff_articles, diff_articles_with};
pub use keyed::diff_by_id;

// Re-export commonly used items
pub use config::MatchConfig;
pub use error::{ChangesetError, Result};
pub use types::{Article, Change, ChangeSet, ChangeStats, Insertion, MatchPair, Repeal, Substitution};
