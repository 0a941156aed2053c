//! Match engine that runs the pass cascade over two article lists.

use super::strategy::{ContentPass, ExactHeadingPass, MatchPass, PartialHeadingPass};
use super::types::{MatchContext, MatchState, PreparedArticle};
use crate::config::MatchConfig;
use crate::types::{Article, MatchPair};

/// Engine pairing old-version articles with new-version articles.
///
/// Runs its passes in order of decreasing confidence. The default cascade is
/// exact heading, partial heading, then content similarity. Anything still
/// unmatched afterwards is a repeal (old side) or insertion (new side).
pub struct MatchEngine {
    passes: Vec<Box<dyn MatchPass>>,
    config: MatchConfig,
}

impl MatchEngine {
    /// Create an engine with the default three-pass cascade.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self::with_passes(
            config,
            vec![
                Box::new(ExactHeadingPass),
                Box::new(PartialHeadingPass),
                Box::new(ContentPass),
            ],
        )
    }

    /// Create an engine with a custom pass list.
    #[must_use]
    pub fn with_passes(config: MatchConfig, passes: Vec<Box<dyn MatchPass>>) -> Self {
        Self { passes, config }
    }

    /// The matching configuration in use.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Match two article lists, returning the final state.
    ///
    /// Never fails: in the worst case nothing matches and every article is
    /// left unmatched.
    #[must_use]
    pub fn run(&self, old: &[Article], new: &[Article]) -> MatchState {
        let window = self.config.content_window;
        let old_prepared: Vec<PreparedArticle> =
            old.iter().map(|a| PreparedArticle::new(a, window)).collect();
        let new_prepared: Vec<PreparedArticle> =
            new.iter().map(|a| PreparedArticle::new(a, window)).collect();

        let ctx = MatchContext::new(&old_prepared, &new_prepared, &self.config);
        let mut state = MatchState::new(old.len(), new.len());

        for pass in &self.passes {
            if state.is_exhausted() {
                break;
            }

            let before = state.pairs().len();
            state = pass.run(&ctx, state);

            tracing::debug!(
                pass = pass.strategy().as_str(),
                matched = state.pairs().len() - before,
                unmatched_old = state.unmatched_old().len(),
                unmatched_new = state.unmatched_new().len(),
                "Matching pass complete"
            );
        }

        state
    }

    /// Match two article lists, returning only the pairs.
    #[must_use]
    pub fn match_articles(&self, old: &[Article], new: &[Article]) -> Vec<MatchPair> {
        self.run(old, new).into_pairs()
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}
