//! The passes of the matching cascade.

use super::types::{MatchContext, MatchState, PreparedArticle};
use crate::text::{token_overlap, word_overlap};
use crate::types::{MatchPair, MatchStrategy};

/// One pass of the matching cascade.
///
/// A pass only considers articles that are unmatched on both sides when it
/// starts, and returns the state extended with the pairs it accepted.
/// Old articles are processed in ascending index order, so when two old
/// articles compete for the same new article the earlier one wins.
pub trait MatchPass {
    /// Strategy recorded on pairs produced by this pass.
    fn strategy(&self) -> MatchStrategy;

    /// Run the pass.
    fn run(&self, ctx: &MatchContext<'_>, state: MatchState) -> MatchState;
}

/// Pass 1: pair articles whose normalized headings are equal.
///
/// First-found: the first unmatched new article (in document order) with an
/// equal heading is taken immediately.
pub struct ExactHeadingPass;

impl MatchPass for ExactHeadingPass {
    fn strategy(&self) -> MatchStrategy {
        MatchStrategy::ExactHeading
    }

    fn run(&self, ctx: &MatchContext<'_>, mut state: MatchState) -> MatchState {
        let old_indices: Vec<usize> = state.unmatched_old().iter().copied().collect();

        for old_index in old_indices {
            let old = &ctx.old[old_index];
            if !old.has_heading() {
                continue;
            }

            let found = state
                .unmatched_new()
                .iter()
                .copied()
                .find(|&new_index| ctx.new[new_index].heading == old.heading);

            if let Some(new_index) = found {
                tracing::trace!(old_index, new_index, "exact heading match");
                state = state.with_pair(MatchPair::new(old_index, new_index, self.strategy(), 1.0));
            }
        }

        state
    }
}

/// Pass 2: pair articles whose headings contain one another or share words.
///
/// Best-of: every remaining new article is scored and the best one is taken
/// if it reaches the heading threshold.
pub struct PartialHeadingPass;

impl PartialHeadingPass {
    fn score(ctx: &MatchContext<'_>, old: &PreparedArticle, new: &PreparedArticle) -> f64 {
        if old.heading.contains(new.heading.as_str()) || new.heading.contains(old.heading.as_str()) {
            ctx.config.containment_score
        } else {
            word_overlap(&old.heading, &new.heading)
        }
    }
}

impl MatchPass for PartialHeadingPass {
    fn strategy(&self) -> MatchStrategy {
        MatchStrategy::PartialHeading
    }

    fn run(&self, ctx: &MatchContext<'_>, mut state: MatchState) -> MatchState {
        let old_indices: Vec<usize> = state.unmatched_old().iter().copied().collect();

        for old_index in old_indices {
            let old = &ctx.old[old_index];
            if !old.has_heading() {
                continue;
            }

            let best = best_candidate(&state, |new_index| {
                let new = &ctx.new[new_index];
                new.has_heading().then(|| Self::score(ctx, old, new))
            });

            if let Some((new_index, score)) = best {
                if score >= ctx.config.heading_threshold {
                    tracing::trace!(old_index, new_index, score, "partial heading match");
                    state = state.with_pair(MatchPair::new(
                        old_index,
                        new_index,
                        self.strategy(),
                        score,
                    ));
                }
            }
        }

        state
    }
}

/// Pass 3: pair articles by the word overlap of their leading body text.
///
/// Considers every remaining old article, including those without a heading.
/// An article without scorable words scores 0, unless its heading and body
/// are both identical to the candidate's after normalization, which scores 1.0.
pub struct ContentPass;

impl ContentPass {
    fn score(old: &PreparedArticle, new: &PreparedArticle) -> f64 {
        if old.body == new.body && old.heading == new.heading {
            1.0
        } else {
            token_overlap(&old.window_tokens, &new.window_tokens)
        }
    }
}

impl MatchPass for ContentPass {
    fn strategy(&self) -> MatchStrategy {
        MatchStrategy::Content
    }

    fn run(&self, ctx: &MatchContext<'_>, mut state: MatchState) -> MatchState {
        let old_indices: Vec<usize> = state.unmatched_old().iter().copied().collect();

        for old_index in old_indices {
            let old = &ctx.old[old_index];

            let best = best_candidate(&state, |new_index| {
                Some(Self::score(old, &ctx.new[new_index]))
            });

            if let Some((new_index, score)) = best {
                if score >= ctx.config.content_threshold {
                    tracing::trace!(old_index, new_index, score, "content match");
                    state = state.with_pair(MatchPair::new(
                        old_index,
                        new_index,
                        self.strategy(),
                        score,
                    ));
                }
            }
        }

        state
    }
}

/// Highest-scoring unmatched new article; ties go to the earliest index.
///
/// `score` returns `None` for candidates that are not eligible.
fn best_candidate(
    state: &MatchState,
    score: impl Fn(usize) -> Option<f64>,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for &new_index in state.unmatched_new() {
        let Some(candidate) = score(new_index) else {
            continue;
        };
        let better = match best {
            Some((_, best_score)) => candidate > best_score,
            None => true,
        };
        if better {
            best = Some((new_index, candidate));
        }
    }

    best
}
