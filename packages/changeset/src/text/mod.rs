//! Text normalization and similarity scoring.
//!
//! Both old and new articles pass through the same normalization before any
//! comparison, so differences the engine reports are semantic rather than
//! artifacts of line wrapping.

mod normalize;
mod similarity;

pub use normalize::{normalize, normalize_heading};
pub use similarity::{content_window, token_overlap, tokenize, word_overlap};
