//! Configuration constants and matching thresholds.

use crate::error::{ChangesetError, Result};

/// Score awarded in the partial heading pass when one heading contains the other.
pub const CONTAINMENT_SCORE: f64 = 0.9;

/// Minimum score for a partial heading match (inclusive).
pub const HEADING_MATCH_THRESHOLD: f64 = 0.5;

/// Minimum score for a content similarity match (inclusive).
pub const CONTENT_MATCH_THRESHOLD: f64 = 0.4;

/// Number of leading body tokens compared in the content pass.
///
/// Bounds the cost of the fallback pass on very long articles; the opening
/// of an article is usually enough to recognise it.
pub const CONTENT_WINDOW_TOKENS: usize = 200;

/// Tokens shorter than this are ignored when scoring word overlap.
pub const MIN_TOKEN_LEN: usize = 3;

/// Text wrap width for the human-readable rendering.
pub const TEXT_WRAP_WIDTH: usize = 100;

/// Environment variable overriding [`HEADING_MATCH_THRESHOLD`].
pub const ENV_HEADING_THRESHOLD: &str = "CHANGESET_HEADING_THRESHOLD";

/// Environment variable overriding [`CONTENT_MATCH_THRESHOLD`].
pub const ENV_CONTENT_THRESHOLD: &str = "CHANGESET_CONTENT_THRESHOLD";

/// Environment variable overriding [`CONTENT_WINDOW_TOKENS`].
pub const ENV_CONTENT_WINDOW: &str = "CHANGESET_CONTENT_WINDOW";

/// Tunable parameters of the matching cascade.
///
/// `MatchConfig::default()` reproduces the documented thresholds exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    pub containment_score: f64,
    pub heading_threshold: f64,
    pub content_threshold: f64,
    pub content_window: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            containment_score: CONTAINMENT_SCORE,
            heading_threshold: HEADING_MATCH_THRESHOLD,
            content_threshold: CONTENT_MATCH_THRESHOLD,
            content_window: CONTENT_WINDOW_TOKENS,
        }
    }
}

impl MatchConfig {
    /// Read overrides from the process environment.
    ///
    /// Unset variables keep their default. A variable that is set but does not
    /// parse is an error rather than silently ignored.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (used by `from_env`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = lookup(ENV_HEADING_THRESHOLD) {
            config.heading_threshold = parse_var(ENV_HEADING_THRESHOLD, &v)?;
        }
        if let Some(v) = lookup(ENV_CONTENT_THRESHOLD) {
            config.content_threshold = parse_var(ENV_CONTENT_THRESHOLD, &v)?;
        }
        if let Some(v) = lookup(ENV_CONTENT_WINDOW) {
            config.content_window = parse_var(ENV_CONTENT_WINDOW, &v)?;
        }

        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_heading_threshold(mut self, threshold: f64) -> Self {
        self.heading_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_content_threshold(mut self, threshold: f64) -> Self {
        self.content_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_content_window(mut self, tokens: usize) -> Self {
        self.content_window = tokens;
        self
    }

    /// Check that all scores lie in `[0, 1]` and the content window is non-zero.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("containment_score", self.containment_score),
            ("heading_threshold", self.heading_threshold),
            ("content_threshold", self.content_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ChangesetError::InvalidConfig(format!(
                    "{name} must be between 0 and 1, got {value}"
                )));
            }
        }

        if self.content_window == 0 {
            return Err(ChangesetError::InvalidConfig(
                "content_window must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ChangesetError::InvalidConfig(format!("{key}={value} is not a valid value")))
}
