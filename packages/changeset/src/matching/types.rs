//! Types for the article matching cascade.

use std::collections::{BTreeSet, HashSet};

use crate::config::MatchConfig;
use crate::text::{content_window, normalize, normalize_heading, tokenize};
use crate::types::{Article, MatchPair};

/// Comparison keys of one article, computed once per diff.
#[derive(Debug, Clone)]
pub struct PreparedArticle {
    /// Heading after [`normalize_heading`]; empty when the article has none.
    pub heading: String,

    /// Body after [`normalize`].
    pub body: String,

    /// Tokens of the leading content window of the body.
    pub window_tokens: HashSet<String>,
}

impl PreparedArticle {
    /// Prepare an article for matching.
    #[must_use]
    pub fn new(article: &Article, content_window_tokens: usize) -> Self {
        let body = normalize(&article.body);
        let window_tokens = tokenize(&content_window(&body, content_window_tokens));
        Self {
            heading: normalize_heading(&article.heading),
            body,
            window_tokens,
        }
    }

    /// Whether the article has a heading usable by the heading passes.
    #[must_use]
    pub fn has_heading(&self) -> bool {
        !self.heading.is_empty()
    }
}

/// Read-only input shared by every pass.
#[derive(Debug)]
pub struct MatchContext<'a> {
    pub old: &'a [PreparedArticle],
    pub new: &'a [PreparedArticle],
    pub config: &'a MatchConfig,
}

impl<'a> MatchContext<'a> {
    #[must_use]
    pub fn new(
        old: &'a [PreparedArticle],
        new: &'a [PreparedArticle],
        config: &'a MatchConfig,
    ) -> Self {
        Self { old, new, config }
    }
}

/// Matching progress threaded from pass to pass.
///
/// Each pass takes the state by value and returns the next one. The two
/// unmatched sets always hold exactly the indices absent from `pairs`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchState {
    pairs: Vec<MatchPair>,
    unmatched_old: BTreeSet<usize>,
    unmatched_new: BTreeSet<usize>,
}

impl MatchState {
    /// Initial state: nothing matched.
    #[must_use]
    pub fn new(old_len: usize, new_len: usize) -> Self {
        Self {
            pairs: Vec::new(),
            unmatched_old: (0..old_len).collect(),
            unmatched_new: (0..new_len).collect(),
        }
    }

    /// Record a pair, removing both indices from the unmatched sets.
    ///
    /// A pair whose old or new index is already matched is ignored, which
    /// keeps the matching a partial bijection.
    #[must_use]
    pub fn with_pair(mut self, pair: MatchPair) -> Self {
        if self.unmatched_old.contains(&pair.old_index)
            && self.unmatched_new.contains(&pair.new_index)
        {
            self.unmatched_old.remove(&pair.old_index);
            self.unmatched_new.remove(&pair.new_index);
            self.pairs.push(pair);
        }
        self
    }

    /// Pairs in the order they were accepted.
    #[must_use]
    pub fn pairs(&self) -> &[MatchPair] {
        &self.pairs
    }

    /// Old indices not yet matched, ascending.
    #[must_use]
    pub fn unmatched_old(&self) -> &BTreeSet<usize> {
        &self.unmatched_old
    }

    /// New indices not yet matched, ascending.
    #[must_use]
    pub fn unmatched_new(&self) -> &BTreeSet<usize> {
        &self.unmatched_new
    }

    /// True when one side has nothing left to match.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.unmatched_old.is_empty() || self.unmatched_new.is_empty()
    }

    /// Consume the state, returning the pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<MatchPair> {
        self.pairs
    }
}
