//! Error types for the changeset crate.
//!
//! The diff engine itself never fails: malformed or empty input degrades to
//! an empty or conservative changeset. `ChangesetError` covers the fallible
//! edges around it (loading article lists, serialization, configuration).

use thiserror::Error;

/// Main error type for the changeset library.
#[derive(Debug, Error)]
pub enum ChangesetError {
    /// Two articles in the same version share an identifier.
    #[error("Duplicate article id '{id}' in {side} version")]
    DuplicateArticleId { id: String, side: String },

    /// Input file extension or output format is not supported.
    #[error("Unsupported format: '{0}'. Expected json, yaml or text")]
    UnsupportedFormat(String),

    /// Matching configuration is out of range or unparsable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML (de)serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Result type alias for changeset operations.
pub type Result<T> = std::result::Result<T, ChangesetError>;
