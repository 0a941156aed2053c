//! Article matching across two versions of a legal text.
//!
//! Implements a staged priority matcher: exact heading equality first, then
//! heading similarity, then body similarity. Each pass receives the
//! unmatched index sets left by the previous pass and returns updated sets,
//! so every stage can be run and inspected on its own.
//!
//! Competing claims on the same new article are settled by old-article
//! order, not by a global optimum; see [`MatchPass`].

mod engine;
mod strategy;
mod types;

pub use engine::MatchEngine;
pub use strategy::{ContentPass, ExactHeadingPass, MatchPass, PartialHeadingPass};
pub use types::{MatchContext, MatchState, PreparedArticle};
